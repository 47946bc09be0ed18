//! Comment markers used to recognise comment-only diff lines.

/// Comment syntax used by a programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSyntax {
    /// Single-line comment with a prefix (e.g. `//`, `#`).
    Line(&'static str),
    /// Block comment with start and end delimiters (e.g. `/*` … `*/`).
    Block(&'static str, &'static str),
    /// Leading marker of a continuation line inside a block comment (e.g. `*`).
    Continuation(&'static str),
}

impl CommentSyntax {
    /// Returns `true` if `trimmed` begins with this syntax's opening marker.
    ///
    /// Continuation markers only count when followed by whitespace or the
    /// end of the line, so `*ptr = 0;` is not a comment. A bare `*/` counts;
    /// `*/` followed by code does not.
    #[must_use]
    pub fn starts(&self, trimmed: &str) -> bool {
        match self {
            Self::Line(prefix) => trimmed.starts_with(prefix),
            Self::Block(start, end) => trimmed.starts_with(start) || trimmed == *end,
            Self::Continuation(marker) => trimmed.strip_prefix(marker).is_some_and(|rest| {
                rest == "/" || rest.chars().next().is_none_or(char::is_whitespace)
            }),
        }
    }
}
