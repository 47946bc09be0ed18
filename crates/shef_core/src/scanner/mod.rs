//! C/C++ security pattern scanning.
//!
//! A scanner takes a text buffer (one filtered diff side, one line per
//! entry) and returns hits directly; no back-end keeps results between
//! calls. [`CAdapter`] drives a scanner for one file and maps its hits back
//! to diff line numbers.

mod adapter;
mod builtin;
mod flawfinder;

use std::path::Path;

pub use adapter::CAdapter;
pub use builtin::BuiltinScanner;
pub use flawfinder::FlawfinderScanner;

use crate::config::{Config, ScannerKind};
use crate::error::ScannerError;

/// One rule hit reported by a scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Rule name, usually the risky function (e.g. `"strcpy"`).
    pub name: String,
    /// Risk level, 0 (informational) to 5.
    pub level: u8,
    /// Short category label (e.g. `"buffer"`).
    pub category: String,
    /// CWE reference, when known.
    pub cwe: Option<String>,
    /// Human-readable warning.
    pub warning: String,
    /// 1-based line in the scanned buffer, when the scanner knows it.
    pub line: Option<usize>,
    /// Text of the matched line.
    pub context: String,
}

/// A C/C++ security pattern scanner.
pub trait CScanner: Send + Sync {
    /// Returns a short identifier for logs (e.g. `"builtin"`).
    fn name(&self) -> &'static str;

    /// Scans `buffer` and returns every hit, in buffer order.
    ///
    /// `label` names the buffer's origin (commit and file) for temporary
    /// file naming and diagnostics.
    fn scan(&self, buffer: &str, label: &str) -> Result<Vec<Hit>, ScannerError>;
}

/// Creates the scanner back-end selected by `config`.
#[must_use]
pub fn from_config(config: &Config) -> Box<dyn CScanner> {
    match config.scanner {
        ScannerKind::Builtin => Box::new(BuiltinScanner::new()),
        ScannerKind::Flawfinder => Box::new(FlawfinderScanner::new(Path::new(&config.flawfinder_path))),
    }
}
