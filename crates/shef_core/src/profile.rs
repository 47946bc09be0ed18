//! Compiled language profiles.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use shef_rules::{Language, LanguageRegistry};

use crate::comment_syntax::{CommentRules, LeadingMarkers};
use crate::error::CatalogError;

/// A rule keyword compiled to a whole-token matcher.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Category the keyword indicates.
    pub category: &'static str,
    /// The literal keyword, reported in findings.
    pub keyword: &'static str,
    /// `\b keyword \b`, case-sensitive.
    pub regex: Regex,
}

/// A language with its rule set compiled for matching.
pub struct LanguageProfile {
    language: &'static dyn Language,
    rules: Vec<CompiledRule>,
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("language", &self.language.id())
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl LanguageProfile {
    /// Compiles every rule of `language`, preserving rule-set order.
    pub fn new(language: &'static dyn Language) -> Result<Self, CatalogError> {
        let mut rules = Vec::new();
        for group in language.rule_set() {
            for &keyword in group.rules {
                let regex = Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).map_err(|source| {
                    CatalogError::InvalidRule {
                        language: language.name().to_string(),
                        rule: keyword.to_string(),
                        source,
                    }
                })?;
                rules.push(CompiledRule {
                    category: group.category,
                    keyword,
                    regex,
                });
            }
        }

        Ok(Self { language, rules })
    }

    /// Returns the underlying language definition.
    #[must_use]
    pub fn language(&self) -> &'static dyn Language {
        self.language
    }

    /// Returns the compiled rules in matching order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }
}

impl CommentRules for LanguageProfile {
    fn is_comment(&self, line: &str) -> bool {
        LeadingMarkers(self.language.comments()).is_comment(line)
    }
}

/// Immutable registry of compiled profiles, indexed by extension.
pub struct ProfileRegistry {
    languages: LanguageRegistry,
    profiles: Vec<LanguageProfile>,
    by_id: HashMap<&'static str, usize>,
}

impl fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileRegistry")
            .field("profiles", &self.profiles)
            .finish_non_exhaustive()
    }
}

impl ProfileRegistry {
    /// Compiles every built-in language.
    pub fn builtin() -> Result<Self, CatalogError> {
        let languages = LanguageRegistry::builtin();
        let profiles = languages
            .languages()
            .iter()
            .map(|language| LanguageProfile::new(*language))
            .collect::<Result<Vec<_>, _>>()?;
        let by_id = profiles
            .iter()
            .enumerate()
            .map(|(idx, profile)| (profile.language.id(), idx))
            .collect();

        Ok(Self {
            languages,
            profiles,
            by_id,
        })
    }

    /// Returns the profile for a file extension (without the dot, any case).
    #[must_use]
    pub fn for_extension(&self, ext: &str) -> Option<&LanguageProfile> {
        let language = self.languages.for_extension(ext)?;
        self.by_id.get(language.id()).and_then(|idx| self.profiles.get(*idx))
    }

    /// Returns all profiles in dispatch order.
    #[must_use]
    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_compile() {
        let registry = ProfileRegistry::builtin().unwrap();
        assert_eq!(registry.profiles().len(), shef_rules::builtin_languages().len());
    }

    #[test]
    fn extension_lookup_ignores_case() {
        let registry = ProfileRegistry::builtin().unwrap();
        let profile = registry.for_extension("PY").unwrap();
        assert_eq!(profile.language().id(), "python");
        assert!(registry.for_extension("c").is_none());
        assert!(registry.for_extension("txt").is_none());
    }

    #[test]
    fn rules_keep_rule_set_order() {
        let registry = ProfileRegistry::builtin().unwrap();
        let profile = registry.for_extension("py").unwrap();
        let expected: Vec<&str> = profile
            .language()
            .rule_set()
            .iter()
            .flat_map(|group| group.rules.iter().copied())
            .collect();
        let actual: Vec<&str> = profile.rules().iter().map(|r| r.keyword).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn profile_recognises_its_comments() {
        let registry = ProfileRegistry::builtin().unwrap();
        let ruby = registry.for_extension("rb").unwrap();
        assert!(ruby.is_comment("  # note"));
        assert!(ruby.is_comment("=begin"));
        assert!(!ruby.is_comment("eval(params[:q])"));
    }
}
