//! Drives a C/C++ scanner over one file's diff.

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::trace;

use super::{CScanner, Hit};
use crate::comment_syntax::{CFamily, is_c_comment};
use crate::diff::{Diff, DiffLine};
use crate::error::ScannerError;
use crate::filter::filter_lines;
use crate::report::{Finding, SideFindings};

/// Runs a scanner on each side of a C/C++ diff and maps hits back to the
/// original lines.
pub struct CAdapter {
    scanner: Box<dyn CScanner>,
    minimum_level: u8,
}

impl fmt::Debug for CAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CAdapter")
            .field("scanner", &self.scanner.name())
            .field("minimum_level", &self.minimum_level)
            .finish()
    }
}

impl CAdapter {
    /// Creates an adapter keeping hits at or above `minimum_level`.
    #[must_use]
    pub fn new(scanner: Box<dyn CScanner>, minimum_level: u8) -> Self {
        Self { scanner, minimum_level }
    }

    /// Returns the wrapped scanner.
    #[must_use]
    pub fn scanner(&self) -> &dyn CScanner {
        self.scanner.as_ref()
    }

    /// Returns the lowest hit level kept.
    #[must_use]
    pub const fn minimum_level(&self) -> u8 {
        self.minimum_level
    }

    /// Scans the added and deleted sides of `diff` independently.
    pub fn scan(&self, diff: &Diff, commit_hash: &str, filename: &str) -> Result<SideFindings, ScannerError> {
        let label = format!("{commit_hash}_{filename}");
        Ok(SideFindings {
            added: self.scan_side(&diff.added, &label)?,
            deleted: self.scan_side(&diff.deleted, &label)?,
        })
    }

    /// Scans one diff side.
    ///
    /// The side is filtered with C/C++ comment rules and serialised into a
    /// fresh buffer, one surviving line per buffer line. Hits below the
    /// minimum level or on comment text are dropped; the rest are
    /// reconciled to a diff line and reported with that line's original
    /// text.
    pub fn scan_side(&self, raw: &[DiffLine], label: &str) -> Result<Vec<Finding>, ScannerError> {
        let filtered = filter_lines(raw, Some(&CFamily));
        if filtered.is_empty() {
            return Ok(Vec::new());
        }

        let mut buffer = String::new();
        for line in &filtered {
            buffer.push_str(&line.text);
            buffer.push('\n');
        }

        let hits = self.scanner.scan(&buffer, label)?;

        let findings = hits
            .into_iter()
            .filter(|hit| hit.level >= self.minimum_level && !is_c_comment(&hit.context))
            .filter_map(|hit| {
                let Some(number) = reconcile(&hit, &filtered) else {
                    #[cfg(feature = "tracing")]
                    trace!(rule = %hit.name, context = %hit.context, "hit does not map to a diff line");
                    return None;
                };
                let original = raw.iter().find(|line| line.number == number)?;

                #[cfg(feature = "tracing")]
                trace!(
                    label,
                    line = number,
                    rule = %hit.name,
                    level = hit.level,
                    category = %hit.category,
                    cwe = hit.cwe.as_deref().unwrap_or("-"),
                    warning = %hit.warning,
                    "scanner hit"
                );

                Some(Finding {
                    line_number: number,
                    line_text: original.text.clone(),
                    matched_rules: vec![hit.name],
                })
            })
            .collect();

        Ok(findings)
    }
}

/// Maps a hit to a diff line number.
///
/// Uses the scanner-reported buffer line when its text equals the hit's
/// context; otherwise the first filtered line with equal text wins.
fn reconcile(hit: &Hit, filtered: &[DiffLine]) -> Option<usize> {
    let context = hit.context.trim();

    let reported = hit
        .line
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| filtered.get(idx))
        .filter(|line| line.text == context);

    reported
        .or_else(|| filtered.iter().find(|line| line.text == context))
        .map(|line| line.number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::BuiltinScanner;
    use crate::test_utils::{FailingScanner, FixedScanner, hit, lines};

    fn builtin(minimum_level: u8) -> CAdapter {
        CAdapter::new(Box::new(BuiltinScanner::new()), minimum_level)
    }

    #[test]
    fn unique_hit_reconciles_to_original_line() {
        let raw = lines(&[(10, "  int n = 0;"), (11, "    strcpy(dst, src);   "), (12, "")]);
        let findings = builtin(1).scan_side(&raw, "abc_parser.c").unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line_number, 11);
        assert_eq!(findings[0].line_text, "    strcpy(dst, src);   ");
        assert_eq!(findings[0].matched_rules, vec!["strcpy"]);
    }

    #[test]
    fn level_zero_hits_are_dropped_by_default() {
        let raw = lines(&[(1, r#"printf("hello\n");"#)]);
        assert!(builtin(1).scan_side(&raw, "t").unwrap().is_empty());
        assert_eq!(builtin(0).scan_side(&raw, "t").unwrap().len(), 1);
    }

    #[test]
    fn comment_hits_are_dropped() {
        let scanner = FixedScanner(vec![hit("strcpy", 4, Some(1), "/* strcpy(a, b); */")]);
        let adapter = CAdapter::new(Box::new(scanner), 1);
        let raw = lines(&[(3, "x = 1;")]);
        assert!(adapter.scan_side(&raw, "t").unwrap().is_empty());
    }

    #[test]
    fn code_after_block_comment_closer_is_scanned() {
        let raw = lines(&[(2, " * copies the name"), (3, "*/ strcpy(dst, src);")]);
        let findings = builtin(1).scan_side(&raw, "t").unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line_number, 3);
        assert_eq!(findings[0].line_text, "*/ strcpy(dst, src);");
        assert_eq!(findings[0].matched_rules, vec!["strcpy"]);
    }

    #[test]
    fn commented_out_code_never_reaches_scanner() {
        let raw = lines(&[(1, "// strcpy(dst, src);"), (2, "/* gets(buf); */"), (3, " * system(cmd);")]);
        assert!(builtin(1).scan_side(&raw, "t").unwrap().is_empty());
    }

    #[test]
    fn inline_comment_is_stripped_before_scanning() {
        let raw = lines(&[(5, "strcpy(dst, src); // FIXME")]);
        let findings = builtin(1).scan_side(&raw, "t").unwrap();
        assert_eq!(findings[0].line_number, 5);
        assert_eq!(findings[0].line_text, "strcpy(dst, src); // FIXME");
    }

    #[test]
    fn duplicate_lines_use_reported_buffer_line() {
        let raw = lines(&[(1, "strcpy(a, b);"), (7, "strcpy(a, b);")]);
        let findings = builtin(1).scan_side(&raw, "t").unwrap();
        let numbers: Vec<_> = findings.iter().map(|f| f.line_number).collect();
        assert_eq!(numbers, vec![1, 7]);
    }

    #[test]
    fn hits_without_buffer_line_bind_to_first_match() {
        let scanner = FixedScanner(vec![hit("strcpy", 4, None, "strcpy(a, b);")]);
        let adapter = CAdapter::new(Box::new(scanner), 1);
        let raw = lines(&[(2, "strcpy(a, b);"), (9, "strcpy(a, b);")]);
        let findings = adapter.scan_side(&raw, "t").unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line_number, 2);
    }

    #[test]
    fn unreconcilable_hits_are_dropped() {
        let scanner = FixedScanner(vec![hit("gets", 5, Some(1), "gets(other);")]);
        let adapter = CAdapter::new(Box::new(scanner), 1);
        let raw = lines(&[(1, "gets(buf);")]);
        assert!(adapter.scan_side(&raw, "t").unwrap().is_empty());
    }

    #[test]
    fn sides_are_scanned_independently() {
        let diff = Diff {
            added: lines(&[(4, "strcpy(dst, src);")]),
            deleted: lines(&[(4, "strncpy(dst, src, n);"), (5, "x++;")]),
        };
        let findings = builtin(1).scan(&diff, "abc", "parser.c").unwrap();
        assert_eq!(findings.added[0].matched_rules, vec!["strcpy"]);
        assert_eq!(findings.deleted[0].matched_rules, vec!["strncpy"]);
    }

    #[test]
    fn empty_side_skips_scanner() {
        let adapter = CAdapter::new(Box::new(FailingScanner), 1);
        let raw = lines(&[(1, "   "), (2, "// only a comment")]);
        assert!(adapter.scan_side(&raw, "t").unwrap().is_empty());
    }

    #[test]
    fn scanner_errors_propagate() {
        let adapter = CAdapter::new(Box::new(FailingScanner), 1);
        let raw = lines(&[(1, "strcpy(a, b);")]);
        assert!(adapter.scan_side(&raw, "t").is_err());
    }
}
