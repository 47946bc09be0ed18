use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when assembling the vulnerability catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A category's regular expression failed to compile.
    #[error("invalid regex in category '{name}': {source}")]
    InvalidRegex {
        /// Name of the category that failed (e.g. `"Injection"`).
        name: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Two categories share the same name.
    #[error("duplicate category name '{name}'")]
    DuplicateName {
        /// The colliding category name.
        name: String,
    },

    /// A language rule keyword could not be compiled into a matcher.
    #[error("invalid rule '{rule}' for {language}: {source}")]
    InvalidRule {
        /// Language the rule belongs to.
        language: String,
        /// The rule keyword.
        rule: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A disabled category does not exist in the built-in catalog.
    #[error("cannot disable unknown category '{name}'")]
    UnknownCategory {
        /// The name that matched no built-in category.
        name: String,
    },
}

/// Errors raised by a C/C++ scanner back-end.
///
/// These never abort a run: the analyzer logs them and treats the file as
/// having no findings.
#[derive(Debug, Error)]
pub enum ScannerError {
    /// The scan buffer could not be written to a temporary file.
    #[error("failed to prepare scan buffer: {source}")]
    Buffer {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The external scanner could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        /// Executable that failed to start.
        program: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The external scanner exited unsuccessfully.
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        /// Executable that failed.
        program: PathBuf,
        /// Exit status description.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The external scanner produced a report line that could not be parsed.
    #[error("malformed scanner output: {line}")]
    Malformed {
        /// The offending output line.
        line: String,
    },
}

/// Errors locating a repository or the history to traverse.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The path or URL does not name a git repository.
    #[error("'{repo}' is not a Git repository")]
    RepositoryNotFound {
        /// The repository argument as given by the user.
        repo: String,
    },

    /// A branch, revision or commit hash could not be resolved.
    #[error("bad revision '{rev}'")]
    InvalidRevision {
        /// The revision as given by the user.
        rev: String,
    },
}

/// Top-level error type for the shefmine pipeline.
///
/// Unifies catalog, configuration, scanner and history errors into a single
/// type for callers that orchestrate the full workflow.
#[derive(Debug, Error)]
pub enum ShefError {
    /// The catalog could not be built.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration could not be read, parsed or validated.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// A scanner back-end failed.
    #[error(transparent)]
    Scanner(#[from] ScannerError),

    /// The repository or revision could not be resolved.
    #[error(transparent)]
    History(#[from] HistoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_message_quotes_argument() {
        let err = HistoryError::RepositoryNotFound {
            repo: "/tmp/nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "'/tmp/nowhere' is not a Git repository");
    }

    #[test]
    fn invalid_revision_message_quotes_revision() {
        let err = HistoryError::InvalidRevision {
            rev: "no-such-branch".to_string(),
        };
        assert_eq!(err.to_string(), "bad revision 'no-such-branch'");
    }

    #[test]
    fn shef_error_is_transparent() {
        let err = ShefError::from(CatalogError::DuplicateName {
            name: "Injection".to_string(),
        });
        assert_eq!(err.to_string(), "duplicate category name 'Injection'");
    }
}
