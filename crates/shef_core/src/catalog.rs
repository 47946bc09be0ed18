//! Vulnerability catalog and commit classifier.

use std::collections::HashSet;
use std::fmt;

use regex::{Regex, RegexBuilder};
#[cfg(feature = "tracing")]
use tracing::trace;

use crate::config::{Config, CustomCategory};
use crate::error::CatalogError;
use crate::normalize::normalize;
use crate::report::VulnerabilityMatch;

/// A compiled vulnerability category.
#[derive(Debug, Clone)]
pub struct Category {
    /// Unique display name.
    pub name: Box<str>,
    /// Case-insensitive pattern searched anywhere in a normalised message.
    pub regex: Regex,
}

impl Category {
    /// Compiles a category from its name and pattern source.
    pub fn new(name: &str, pattern: &str) -> Result<Self, CatalogError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| CatalogError::InvalidRegex {
                name: name.to_string(),
                source,
            })?;

        Ok(Self {
            name: name.into(),
            regex,
        })
    }
}

/// Immutable, ordered collection of vulnerability categories.
///
/// Built once at start-up and shared by reference. Categories are tested in
/// order and are not exclusive: a message may match several, including
/// categories whose patterns are identical.
pub struct Catalog {
    categories: Vec<Category>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("categories", &self.categories.len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Creates a catalog of every built-in category.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_config(&Config::default())
    }

    /// Creates a catalog from the built-ins minus `disabled_categories`,
    /// followed by the configured custom categories.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        for name in &config.disabled_categories {
            if !shef_rules::BUILTIN_CATEGORIES.iter().any(|def| def.name == name) {
                return Err(CatalogError::UnknownCategory { name: name.clone() });
            }
        }

        let builtin = shef_rules::BUILTIN_CATEGORIES
            .iter()
            .filter(|def| !config.disabled_categories.iter().any(|name| name == def.name))
            .map(|def| Category::new(def.name, def.regex));

        let custom = config
            .categories
            .iter()
            .map(|CustomCategory { name, regex }| Category::new(name, regex));

        let categories = builtin.chain(custom).collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    /// Creates a catalog from already compiled categories.
    ///
    /// Fails if two categories share a name.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.name.as_ref()) {
                return Err(CatalogError::DuplicateName {
                    name: category.name.to_string(),
                });
            }
        }

        Ok(Self { categories })
    }

    /// Returns the categories in classification order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Classifies a raw commit message.
    ///
    /// The message is normalised first. Every category whose pattern finds a
    /// match contributes one entry, in catalog order, carrying the first
    /// matched substring.
    #[must_use]
    pub fn classify(&self, message: &str) -> Vec<VulnerabilityMatch> {
        let normalized = normalize(message);
        self.classify_normalized(&normalized)
    }

    /// Classifies a message that has already been normalised.
    #[must_use]
    pub fn classify_normalized(&self, normalized: &str) -> Vec<VulnerabilityMatch> {
        let matches: Vec<VulnerabilityMatch> = self
            .categories
            .iter()
            .filter_map(|category| {
                category.regex.find(normalized).map(|found| VulnerabilityMatch {
                    name: category.name.to_string(),
                    matched_text: found.as_str().to_string(),
                })
            })
            .collect();

        #[cfg(feature = "tracing")]
        trace!(matched = matches.len(), "classified message");

        matches
    }
}
