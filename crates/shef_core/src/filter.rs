//! Diff line filtering.

use crate::comment_syntax::CommentRules;
use crate::diff::DiffLine;

/// Drops blank and comment-only lines, returning the survivors trimmed.
///
/// With `rules`, lines the rules call comment-only are dropped and inline
/// comments are stripped from the rest; a line left empty by stripping is
/// dropped too. Order and line numbers are preserved.
#[must_use]
pub fn filter_lines(lines: &[DiffLine], rules: Option<&dyn CommentRules>) -> Vec<DiffLine> {
    lines
        .iter()
        .filter_map(|line| {
            let trimmed = line.text.trim();
            if trimmed.is_empty() {
                return None;
            }

            let Some(rules) = rules else {
                return Some(DiffLine::new(line.number, trimmed));
            };

            if rules.is_comment(trimmed) {
                return None;
            }

            let stripped = rules.strip_inline(trimmed);
            let stripped = stripped.trim();
            (!stripped.is_empty()).then(|| DiffLine::new(line.number, stripped))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment_syntax::{CFamily, CommentSyntax, LeadingMarkers};
    use crate::test_utils::lines;

    #[test]
    fn drops_blank_lines_and_trims() {
        let raw = lines(&[(1, "  x = 1  "), (2, ""), (3, "   \t"), (4, "y")]);
        let filtered = filter_lines(&raw, None);
        assert_eq!(filtered, lines(&[(1, "x = 1"), (4, "y")]));
    }

    #[test]
    fn drops_full_line_comments_and_keeps_numbers() {
        let python = LeadingMarkers(&[CommentSyntax::Line("#")]);
        let raw = lines(&[(10, "# setup"), (11, "    eval(data)"), (12, ""), (14, "  # done")]);
        let filtered = filter_lines(&raw, Some(&python));
        assert_eq!(filtered, lines(&[(11, "eval(data)")]));
    }

    #[test]
    fn c_rules_strip_inline_comments() {
        let raw = lines(&[
            (1, "// header"),
            (2, "strcpy(dst, src); /* unsafe */"),
            (3, " * continuation"),
            (4, "int n = 0; // counter"),
            (5, "/* whole */"),
        ]);
        let filtered = filter_lines(&raw, Some(&CFamily));
        assert_eq!(filtered, lines(&[(2, "strcpy(dst, src);"), (4, "int n = 0;")]));
    }

    #[test]
    fn code_after_block_closer_survives() {
        let javascript = LeadingMarkers(&[
            CommentSyntax::Line("//"),
            CommentSyntax::Block("/*", "*/"),
            CommentSyntax::Continuation("*"),
        ]);
        let raw = lines(&[(7, " * legacy path"), (8, " */ eval(x)"), (9, " */")]);
        assert_eq!(filter_lines(&raw, Some(&javascript)), lines(&[(8, "*/ eval(x)")]));

        let raw = lines(&[(3, "*/ strcpy(dst, src);"), (4, "*/ // end")]);
        assert_eq!(filter_lines(&raw, Some(&CFamily)), lines(&[(3, "strcpy(dst, src);")]));
    }

    #[test]
    fn generic_rules_do_not_strip_trailing_comments() {
        let python = LeadingMarkers(&[CommentSyntax::Line("#")]);
        let raw = lines(&[(1, "x = md5(data)  # legacy")]);
        let filtered = filter_lines(&raw, Some(&python));
        assert_eq!(filtered, lines(&[(1, "x = md5(data)  # legacy")]));
    }
}
