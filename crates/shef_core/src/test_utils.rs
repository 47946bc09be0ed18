//! Test utilities for `shef_core` (compiled only during testing).

use std::path::PathBuf;

use crate::diff::{ChangeType, Commit, Diff, DiffLine, FileModification};
use crate::error::ScannerError;
use crate::scanner::{CScanner, Hit};

pub fn lines(entries: &[(usize, &str)]) -> Vec<DiffLine> {
    entries.iter().map(|&(number, text)| DiffLine::new(number, text)).collect()
}

pub fn modification(path: &str, added: Vec<DiffLine>, deleted: Vec<DiffLine>) -> FileModification {
    FileModification {
        old_path: Some(path.to_string()),
        new_path: Some(path.to_string()),
        change_type: ChangeType::Modify,
        diff: Diff { added, deleted },
    }
}

pub fn commit(hash: &str, message: &str, modifications: Vec<FileModification>) -> Commit {
    Commit {
        hash: hash.to_string(),
        message: message.to_string(),
        modifications,
    }
}

pub fn hit(name: &str, level: u8, line: Option<usize>, context: &str) -> Hit {
    Hit {
        name: name.to_string(),
        level,
        category: "buffer".to_string(),
        cwe: None,
        warning: "test".to_string(),
        line,
        context: context.to_string(),
    }
}

/// Returns the same hits for every buffer.
pub struct FixedScanner(pub Vec<Hit>);

impl CScanner for FixedScanner {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn scan(&self, _buffer: &str, _label: &str) -> Result<Vec<Hit>, ScannerError> {
        Ok(self.0.clone())
    }
}

/// Fails every scan as if the executable crashed.
pub struct FailingScanner;

impl CScanner for FailingScanner {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn scan(&self, _buffer: &str, _label: &str) -> Result<Vec<Hit>, ScannerError> {
        Err(ScannerError::Failed {
            program: PathBuf::from("flawfinder"),
            status: "exit status: 1".to_string(),
            stderr: "Traceback".to_string(),
        })
    }
}
