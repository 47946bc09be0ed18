//! Report types and their JSON form.
//!
//! The report file is a JSON object keyed by commit hash, in processing
//! order. `Report` serialises its commits as a map by hand so that order
//! survives without an order-preserving map type.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A category that matched a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityMatch {
    /// Category name.
    pub name: String,
    /// The substring of the normalised message the category matched.
    #[serde(rename = "match")]
    pub matched_text: String,
}

/// A single flagged line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Line number in the diff side the line came from.
    #[serde(rename = "line_num")]
    pub line_number: usize,
    /// Line text as reported (trimmed for generic languages, original for C/C++).
    #[serde(rename = "line")]
    pub line_text: String,
    /// Rule keywords or scanner rule names that fired on the line.
    #[serde(rename = "vulnerability")]
    pub matched_rules: Vec<String>,
}

/// Findings for one side of a file's diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideFindings {
    /// Findings on added lines.
    pub added: Vec<Finding>,
    /// Findings on deleted lines.
    pub deleted: Vec<Finding>,
}

impl SideFindings {
    /// Returns `true` if neither side has findings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty()
    }
}

/// Findings for one modified file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Reported path: the old path for deletions, the new path otherwise.
    pub file: String,
    /// Findings on added lines; omitted from JSON when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub added: Vec<Finding>,
    /// Findings on deleted lines; omitted from JSON when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deleted: Vec<Finding>,
}

impl FileReport {
    /// Builds a report for `file`, or `None` when there is nothing to report.
    #[must_use]
    pub fn from_findings(file: impl Into<String>, findings: SideFindings) -> Option<Self> {
        if findings.is_empty() {
            return None;
        }

        Some(Self {
            file: file.into(),
            added: findings.added,
            deleted: findings.deleted,
        })
    }

    /// Returns the total number of findings on both sides.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.added.len() + self.deleted.len()
    }
}

/// Everything recorded about one classified commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReport {
    /// Full commit hash; the key of this entry in the report file.
    #[serde(skip)]
    pub hash: String,
    /// Raw, un-normalised commit message.
    pub message: String,
    /// Matched categories in catalog order.
    pub vulnerabilities: Vec<VulnerabilityMatch>,
    /// Files with at least one finding.
    pub files_changed: Vec<FileReport>,
}

/// The full mining result, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    commits: Vec<CommitReport>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a commit. Later entries keep their position after earlier ones.
    pub fn push(&mut self, commit: CommitReport) {
        self.commits.push(commit);
    }

    /// Returns the commits in processing order.
    #[must_use]
    pub fn commits(&self) -> &[CommitReport] {
        &self.commits
    }

    /// Returns the number of reported commits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Returns `true` if no commit was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Returns the number of line findings across all commits.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.commits
            .iter()
            .flat_map(|commit| &commit.files_changed)
            .map(FileReport::finding_count)
            .sum()
    }

    /// Serialises the report as JSON indented by two spaces.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<CommitReport> for Report {
    fn from_iter<T: IntoIterator<Item = CommitReport>>(iter: T) -> Self {
        Self {
            commits: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.commits.len()))?;
        for commit in &self.commits {
            map.serialize_entry(&commit.hash, commit)?;
        }
        map.end()
    }
}
