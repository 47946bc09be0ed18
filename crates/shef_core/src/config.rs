use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

/// Highest level a C/C++ scanner hit can carry.
pub const MAX_LEVEL: u8 = 5;

/// Which C/C++ scanner back-end analyses C-family files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScannerKind {
    /// The in-process lexical scanner.
    #[default]
    Builtin,
    /// The external `flawfinder` executable.
    Flawfinder,
}

impl ScannerKind {
    /// Returns the lowercase name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Flawfinder => "flawfinder",
        }
    }
}

impl fmt::Display for ScannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScannerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "builtin" => Ok(Self::Builtin),
            "flawfinder" => Ok(Self::Flawfinder),
            _ => Err(format!("invalid scanner '{s}' (expected 'builtin' or 'flawfinder')")),
        }
    }
}

/// A user-defined vulnerability category declared in `.shefmine.toml`.
///
/// Custom categories are appended to the built-in catalog, after it, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCategory {
    /// Unique display name; must not collide with a built-in category.
    pub name: String,
    /// Regular expression searched case-insensitively in commit messages.
    pub regex: String,
}

/// Project-level configuration loaded from `.shefmine.toml`.
///
/// Every key is optional. Missing keys take the defaults below, which keep
/// every classified commit and use the built-in C/C++ scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drop classified commits that produced no file-level findings.
    pub drop_empty_commits: bool,

    /// C/C++ scanner back-end.
    pub scanner: ScannerKind,

    /// Executable used by the `flawfinder` back-end.
    pub flawfinder_path: PathBuf,

    /// Minimum C/C++ hit level kept in the report.
    pub minimum_level: u8,

    /// Glob patterns for file paths that are never analysed.
    pub exclude_paths: Vec<String>,

    /// Built-in category names to switch off.
    pub disabled_categories: Vec<String>,

    /// Custom categories appended to the catalog.
    pub categories: Vec<CustomCategory>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drop_empty_commits: false,
            scanner: ScannerKind::Builtin,
            flawfinder_path: PathBuf::from("flawfinder"),
            minimum_level: 1,
            exclude_paths: Vec::new(),
            disabled_categories: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl Config {
    /// Creates a default configuration with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a `.shefmine.toml` file.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the TOML schema cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_level > MAX_LEVEL {
            return Err(ConfigError::InvalidLevel {
                level: self.minimum_level,
            });
        }
        Ok(())
    }

    /// Compiles `exclude_paths` into a glob set.
    pub fn compile_exclusions(&self) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_paths {
            let glob = Glob::new(pattern).map_err(|source| ConfigError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| ConfigError::InvalidGlob {
            pattern: self.exclude_paths.join(", "),
            source,
        })
    }
}

/// Errors that can occur when reading, parsing or validating a
/// `.shefmine.toml` configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid TOML or unexpected values.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the config file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// `minimum_level` is above the highest scanner level.
    #[error("minimum_level {level} is out of range (0-5)")]
    InvalidLevel {
        /// The rejected level.
        level: u8,
    },

    /// An `exclude_paths` entry is not a valid glob.
    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidGlob {
        /// The offending glob.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: globset::Error,
    },
}

impl ConfigError {
    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::InvalidLevel { .. } | Self::InvalidGlob { .. } => None,
        }
    }
}
