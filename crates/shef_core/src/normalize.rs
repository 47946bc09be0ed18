//! Commit message normalisation.

use std::sync::LazyLock;

use regex::Regex;

/// Migration identifiers and attribution trailers, each up to end of line.
static TRAILER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "static regex is known-valid at compile time")]
    Regex::new(
        r"(?i)git-svn-id.*|\b(?:acked|cc|reported|reviewed|signed(?:[ \t\-_]off)?|submitted|tested)[ \t\-_]*(?:by|on)?:.*",
    )
    .unwrap()
});

/// Strips administrative trailers from a commit message.
///
/// Removes `git-svn-id` markers and `Signed-off-by:`-style attribution
/// trailers (acked, cc, reported, reviewed, signed, signed-off, submitted,
/// tested, optionally followed by `by`/`on`) through the end of their line,
/// then trims the remainder. Names and addresses in those trailers would
/// otherwise feed the classifier.
#[must_use]
pub fn normalize(message: &str) -> String {
    TRAILER_PATTERN.replace_all(message, "").trim().to_string()
}
