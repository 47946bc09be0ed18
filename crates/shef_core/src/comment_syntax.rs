//! Comment recognition for changed lines.
//!
//! Generic languages only recognise lines that start with a comment marker.
//! C and C++ get an extent-aware check that also strips inline comments,
//! since the C scanner must never see comment text.

use std::borrow::Cow;

pub use shef_rules::CommentSyntax;

/// Decides whether a line is comment-only, and strips inline comments.
pub trait CommentRules: Send + Sync {
    /// Returns `true` if the line holds nothing but a comment.
    fn is_comment(&self, line: &str) -> bool;

    /// Removes inline comments from a line that is not comment-only.
    fn strip_inline<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(line)
    }
}

/// Comment rules made of leading markers only.
#[derive(Debug, Clone, Copy)]
pub struct LeadingMarkers<'a>(pub &'a [CommentSyntax]);

impl CommentRules for LeadingMarkers<'_> {
    fn is_comment(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if self.0.iter().any(|syntax| syntax.starts(trimmed)) {
            return true;
        }

        // A block closer is comment-only when what follows it is.
        self.0.iter().any(|syntax| match syntax {
            CommentSyntax::Block(_, end) => trimmed
                .strip_prefix(*end)
                .map(str::trim)
                .is_some_and(|rest| !rest.is_empty() && self.is_comment(rest)),
            _ => false,
        })
    }
}

/// Comment rules for C and C++ sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct CFamily;

const C_CONTINUATION: CommentSyntax = CommentSyntax::Continuation("*");
const C_BLOCK_END: &str = "*/";

impl CommentRules for CFamily {
    fn is_comment(&self, line: &str) -> bool {
        is_c_comment(line)
    }

    fn strip_inline<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match line.trim_start().strip_prefix(C_BLOCK_END) {
            Some(rest) => strip_c_comments(rest.trim_start()),
            None => strip_c_comments(line),
        }
    }
}

/// Returns `true` if `line` is entirely a C/C++ comment.
///
/// That is a `//` line, a block-comment continuation (`* text`, `*/`), a
/// closing `*/` followed only by comments, or a line that is empty once
/// every comment span is removed.
#[must_use]
pub fn is_c_comment(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }

    if let Some(rest) = trimmed.strip_prefix(C_BLOCK_END) {
        let rest = rest.trim();
        return rest.is_empty() || is_c_comment(rest);
    }

    if trimmed.starts_with("//") || C_CONTINUATION.starts(trimmed) {
        return true;
    }

    strip_c_comments(trimmed).trim().is_empty()
}

/// Removes `/* ... */` spans and a trailing `//` comment from `line`.
///
/// Comment markers inside string and character literals are left alone. An
/// unterminated `/*` swallows the rest of the line. Each removed block span
/// is replaced by a single space so neighbouring tokens stay apart.
#[must_use]
pub fn strip_c_comments(line: &str) -> Cow<'_, str> {
    if !line.contains("/*") && !line.contains("//") {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"' | '\'', _) => {
                quote = Some(c);
                out.push(c);
            }
            ('/', Some('/')) => break,
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    Cow::Owned(out.trim_end().to_string())
}
