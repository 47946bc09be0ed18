//! Commit classification and changed-line analysis engine for shefmine.
//!
//! This crate decides which commits of a history look security-relevant and
//! locates insecure-coding patterns in the lines they change. It knows
//! nothing about git; callers hand it [`Commit`] values.
//!
//! # Main Types
//!
//! - [`Catalog`] - Ordered vulnerability categories matched against messages
//! - [`ProfileRegistry`] - Compiled per-language rule sets, by extension
//! - [`CAdapter`] - Runs a [`CScanner`] over C/C++ diffs
//! - [`Analyzer`] - The per-commit pipeline and empty-commit policy
//! - [`Report`] - The JSON report keyed by commit hash
//! - [`Config`] - User configuration loaded from `.shefmine.toml`
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`CatalogError`] - Category and rule compilation failures
//! - [`ConfigError`] - Configuration loading/parsing failures
//! - [`ScannerError`] - C/C++ scanner failures, recoverable per file
//! - [`HistoryError`] - Repository and revision lookup failures
//! - [`ShefError`] - Top-level error enum combining the above
//!
//! The CLI crate (`shef_cli`) uses `anyhow` for error propagation.

/// The per-commit pipeline: classify, analyse changed files, aggregate.
pub mod analyzer;
/// The vulnerability catalog and commit classifier.
pub mod catalog;
/// Comment predicates used by the line filter.
pub mod comment_syntax;
/// User configuration loaded from `.shefmine.toml`.
pub mod config;
/// Commits, file modifications and line diffs.
pub mod diff;
/// Error types for catalog, configuration, scanner and history failures.
pub mod error;
/// Blank and comment line filtering.
pub mod filter;
/// Filesystem helpers for atomic writes.
pub mod fs_util;
/// Keyword matching for non-C languages.
pub mod matcher;
/// Commit message trailer removal.
pub mod normalize;
/// Common re-exports for internal use.
pub mod prelude;
/// Compiled language profiles.
pub mod profile;
/// Findings and the JSON report.
pub mod report;
/// C/C++ scanner back-ends and the diff adapter.
pub mod scanner;
#[cfg(test)]
pub(crate) mod test_utils;

pub use analyzer::Analyzer;
pub use catalog::{Catalog, Category};
pub use config::{Config, ConfigError, CustomCategory, ScannerKind};
pub use diff::{ChangeType, Commit, Diff, DiffLine, FileModification};
pub use error::{CatalogError, HistoryError, ScannerError, ShefError};
pub use normalize::normalize;
pub use profile::{LanguageProfile, ProfileRegistry};
pub use report::{CommitReport, FileReport, Finding, Report, SideFindings, VulnerabilityMatch};
pub use scanner::{BuiltinScanner, CAdapter, CScanner, FlawfinderScanner, Hit};

/// Default filename for shefmine configuration.
pub const CONFIG_FILENAME: &str = ".shefmine.toml";
