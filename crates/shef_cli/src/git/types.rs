//! Git types used throughout the CLI.

/// Which commits a history walk yields, and in what order.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Only walk commits reachable from this branch or revision.
    pub branch: Option<String>,
    /// Only yield this one commit.
    pub single: Option<String>,
    /// Oldest commit first instead of newest first.
    pub reverse: bool,
    /// Skip commits with more than one parent.
    pub no_merge: bool,
}

/// The parts of a commit needed before its diff is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    /// Full hex hash.
    pub hash: String,
    /// Commit message with surrounding whitespace removed.
    pub message: String,
    /// Number of parent commits.
    pub parent_count: usize,
}

impl CommitHeader {
    /// Returns `true` for commits with more than one parent.
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        self.parent_count > 1
    }
}
