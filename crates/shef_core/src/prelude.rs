//! Convenience re-exports of the most commonly used types.

pub use crate::analyzer::Analyzer;
pub use crate::catalog::Catalog;
pub use crate::config::{Config, ConfigError, ScannerKind};
pub use crate::diff::{ChangeType, Commit, Diff, DiffLine, FileModification};
pub use crate::error::{HistoryError, ShefError};
pub use crate::filter::filter_lines;
pub use crate::normalize::normalize;
pub use crate::profile::ProfileRegistry;
pub use crate::report::{CommitReport, FileReport, Finding, Report};
