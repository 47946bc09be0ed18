//! Read-only view of commits and their line-level diffs.

use std::path::Path;

/// How a file changed in a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// The file was created.
    Add,
    /// The file's content changed in place.
    Modify,
    /// The file was removed.
    Delete,
    /// The file moved, possibly with content changes.
    Rename,
}

/// One changed line: its number on its side of the diff and its text,
/// without the line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// 1-based line number in the new file (added) or old file (deleted).
    pub number: usize,
    /// Line text.
    pub text: String,
}

impl DiffLine {
    /// Creates a diff line.
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Added and deleted lines of one file, each in diff order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    /// Lines present only in the new version.
    pub added: Vec<DiffLine>,
    /// Lines present only in the old version.
    pub deleted: Vec<DiffLine>,
}

/// A file touched by a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileModification {
    /// Path before the change; `None` for additions.
    pub old_path: Option<String>,
    /// Path after the change; `None` for deletions.
    pub new_path: Option<String>,
    /// Kind of change.
    pub change_type: ChangeType,
    /// Line-level diff.
    pub diff: Diff,
}

impl FileModification {
    /// Returns the path reported for this file: the old path for deletions,
    /// the new path otherwise.
    #[must_use]
    pub fn path(&self) -> &str {
        let preferred = match self.change_type {
            ChangeType::Delete => self.old_path.as_deref().or(self.new_path.as_deref()),
            ChangeType::Add | ChangeType::Modify | ChangeType::Rename => {
                self.new_path.as_deref().or(self.old_path.as_deref())
            }
        };
        preferred.unwrap_or_default()
    }

    /// Returns the extension of the reported path, without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        Path::new(self.path()).extension().and_then(|ext| ext.to_str())
    }
}

/// A commit as seen by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full hex hash.
    pub hash: String,
    /// Raw commit message.
    pub message: String,
    /// Files touched, in diff order. Empty for merge commits.
    pub modifications: Vec<FileModification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modification(old: Option<&str>, new: Option<&str>, change_type: ChangeType) -> FileModification {
        FileModification {
            old_path: old.map(str::to_string),
            new_path: new.map(str::to_string),
            change_type,
            diff: Diff::default(),
        }
    }

    #[test]
    fn deleted_file_reports_old_path() {
        let m = modification(Some("src/old.c"), None, ChangeType::Delete);
        assert_eq!(m.path(), "src/old.c");
    }

    #[test]
    fn renamed_file_reports_new_path() {
        let m = modification(Some("a.py"), Some("b.py"), ChangeType::Rename);
        assert_eq!(m.path(), "b.py");
    }

    #[test]
    fn extension_is_taken_from_reported_path() {
        let m = modification(None, Some("lib/util.C++"), ChangeType::Add);
        assert_eq!(m.extension(), Some("C++"));

        let m = modification(Some("Makefile"), Some("Makefile"), ChangeType::Modify);
        assert_eq!(m.extension(), None);
    }
}
