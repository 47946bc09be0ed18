//! Language registry for dispatching files by extension.

use std::collections::HashMap;

use crate::language::Language;
use crate::languages::builtin_languages;

/// Central registry of the built-in languages, indexed by extension.
pub struct LanguageRegistry {
    languages: Vec<&'static dyn Language>,
    by_extension: HashMap<&'static str, usize>,
}

impl LanguageRegistry {
    /// Creates a registry pre-loaded with all built-in languages.
    #[must_use]
    pub fn builtin() -> Self {
        let languages = builtin_languages();
        let mut by_extension = HashMap::new();

        for (idx, language) in languages.iter().enumerate() {
            for ext in language.extensions() {
                by_extension.insert(*ext, idx);
            }
        }

        Self {
            languages,
            by_extension,
        }
    }

    /// Returns the language owning `ext` (without the dot, any case).
    #[must_use]
    pub fn for_extension(&self, ext: &str) -> Option<&'static dyn Language> {
        let lowered = ext.to_ascii_lowercase();
        self.by_extension
            .get(lowered.as_str())
            .and_then(|idx| self.languages.get(*idx))
            .copied()
    }

    /// Returns the registered languages in dispatch order.
    #[must_use]
    pub fn languages(&self) -> &[&'static dyn Language] {
        &self.languages
    }
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("languages", &self.languages.iter().map(|l| l.id()).collect::<Vec<_>>())
            .field("extension_count", &self.by_extension.len())
            .finish()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::BUILTIN_CATEGORIES;
    use crate::cfamily::is_c_extension;

    #[test]
    fn extension_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for language in builtin_languages() {
            for ext in language.extensions() {
                assert!(seen.insert(*ext), "extension '{ext}' is claimed twice");
            }
        }
    }

    #[test]
    fn no_language_claims_a_c_extension() {
        for language in builtin_languages() {
            for ext in language.extensions() {
                assert!(!is_c_extension(ext), "{} claims C extension '{ext}'", language.name());
            }
        }
    }

    #[test]
    fn language_ids_are_unique() {
        let mut seen = HashSet::new();
        for language in builtin_languages() {
            assert!(seen.insert(language.id()), "duplicate language id '{}'", language.id());
        }
    }

    #[test]
    fn rule_groups_name_known_categories() {
        let known: HashSet<_> = BUILTIN_CATEGORIES.iter().map(|c| c.name).collect();
        for language in builtin_languages() {
            for group in language.rule_set() {
                assert!(
                    known.contains(group.category),
                    "{} uses unknown category '{}'",
                    language.name(),
                    group.category
                );
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.for_extension("PY").map(|l| l.id()), Some("python"));
        assert_eq!(registry.for_extension("tsx").map(|l| l.id()), Some("javascript"));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let registry = LanguageRegistry::builtin();
        assert!(registry.for_extension("md").is_none());
        assert!(registry.for_extension("c").is_none());
    }
}
