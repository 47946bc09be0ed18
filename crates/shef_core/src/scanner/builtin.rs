//! In-process lexical scanner over the risky-call table.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use shef_rules::{ArgCheck, CALL_RULES, CallRule};

use super::{CScanner, Hit};
use crate::error::ScannerError;

/// `%s` conversions without a field width bound, as `sprintf` sees them.
static UNBOUNDED_STRING_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "static regex is known-valid at compile time")]
    Regex::new(r"%-?(?:[0-9]+|\*)?s").unwrap()
});

/// Scanner that tokenises each buffer line and looks identifiers up in the
/// built-in call table.
///
/// Identifiers inside string and character literals are ignored. Function
/// rules fire only when the identifier is followed by `(`; the static array
/// rule fires on `char name[N]` declarations with a non-empty size.
pub struct BuiltinScanner {
    rules: HashMap<&'static str, &'static CallRule>,
}

impl fmt::Debug for BuiltinScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinScanner")
            .field("names", &self.rules.len())
            .finish()
    }
}

impl Default for BuiltinScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinScanner {
    /// Creates a scanner indexing every entry of the call table.
    #[must_use]
    pub fn new() -> Self {
        let rules = CALL_RULES
            .iter()
            .flat_map(|rule| rule.names.iter().map(move |name| (*name, rule)))
            .collect();
        Self { rules }
    }

    fn scan_line(&self, line: &str, number: usize, hits: &mut Vec<Hit>) {
        let bytes = line.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() {
            let b = bytes[pos];

            if b == b'"' || b == b'\'' {
                pos = skip_literal(bytes, pos);
                continue;
            }

            if b.is_ascii_digit() {
                pos = skip_word(bytes, pos);
                continue;
            }

            if !is_ident_start(b) {
                pos += 1;
                continue;
            }

            let start = pos;
            pos = skip_word(bytes, pos);
            let ident = &line[start..pos];

            let Some(rule) = self.rules.get(ident) else {
                continue;
            };

            let level = match rule.check {
                ArgCheck::StaticArray => {
                    if !is_static_array(bytes, pos) {
                        continue;
                    }
                    rule.level
                }
                check => {
                    let open = skip_spaces(bytes, pos);
                    if bytes.get(open) != Some(&b'(') {
                        continue;
                    }
                    let args = split_args(&line[open + 1..]);
                    adjusted_level(rule.level, check, &args)
                }
            };

            hits.push(Hit {
                name: ident.to_string(),
                level,
                category: rule.category.to_string(),
                cwe: Some(rule.cwe.to_string()),
                warning: rule.warning.to_string(),
                line: Some(number),
                context: line.to_string(),
            });
        }
    }
}

impl CScanner for BuiltinScanner {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn scan(&self, buffer: &str, _label: &str) -> Result<Vec<Hit>, ScannerError> {
        let mut hits = Vec::new();
        for (idx, line) in buffer.lines().enumerate() {
            self.scan_line(line, idx + 1, &mut hits);
        }
        Ok(hits)
    }
}

fn adjusted_level(level: u8, check: ArgCheck, args: &[&str]) -> u8 {
    let literal = |idx: usize| args.get(idx).copied().filter(|arg| is_string_literal(arg));

    match check {
        ArgCheck::ConstantSource(idx) if literal(idx).is_some() => 1,
        ArgCheck::ConstantFormat(idx) if literal(idx).is_some() => 0,
        ArgCheck::BoundedFormat(idx) => match literal(idx) {
            Some(format) if !UNBOUNDED_STRING_FORMAT.is_match(format) => 1,
            _ => level,
        },
        ArgCheck::ScanFormat(idx) => match literal(idx) {
            Some(format) if !format.contains("%s") && !format.contains("%[") => 1,
            _ => level,
        },
        _ => level,
    }
}

const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

const fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn skip_word(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_ident_char(bytes[pos]) {
        pos += 1;
    }
    pos
}

fn skip_spaces(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Returns the position just past the literal opening at `pos`.
fn skip_literal(bytes: &[u8], pos: usize) -> usize {
    let quote = bytes[pos];
    let mut i = pos + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// `char name[SIZE]` with a non-empty size, starting right after `char`.
fn is_static_array(bytes: &[u8], pos: usize) -> bool {
    let name_start = skip_spaces(bytes, pos);
    if name_start == pos || !bytes.get(name_start).copied().is_some_and(is_ident_start) {
        return false;
    }
    let name_end = skip_word(bytes, name_start);
    let open = skip_spaces(bytes, name_end);
    if bytes.get(open) != Some(&b'[') {
        return false;
    }
    let size = skip_spaces(bytes, open + 1);
    bytes.get(size).is_some_and(|b| *b != b']')
}

/// Splits the text after an opening parenthesis into top-level arguments,
/// stopping at the matching `)` or the end of the line.
fn split_args(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                i = skip_literal(bytes, i);
                continue;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' if depth > 0 => depth -= 1,
            b')' => {
                args.push(text[start..i].trim());
                return args.into_iter().filter(|arg| !arg.is_empty()).collect();
            }
            b',' if depth == 0 => {
                args.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    args.push(text[start..].trim());
    args.into_iter().filter(|arg| !arg.is_empty()).collect()
}

/// A string literal, possibly prefixed (`L"..."`, `u8"..."`) or made of
/// adjacent literals.
fn is_string_literal(arg: &str) -> bool {
    let body = arg
        .strip_prefix("u8")
        .or_else(|| arg.strip_prefix('L'))
        .or_else(|| arg.strip_prefix('u'))
        .or_else(|| arg.strip_prefix('U'))
        .unwrap_or(arg);
    body.len() >= 2 && body.starts_with('"') && body.ends_with('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(buffer: &str) -> Vec<Hit> {
        BuiltinScanner::new().scan(buffer, "test").unwrap()
    }

    fn levels(buffer: &str) -> Vec<(String, u8)> {
        scan(buffer).into_iter().map(|h| (h.name, h.level)).collect()
    }

    #[test]
    fn strcpy_with_variable_source_is_level_four() {
        let hits = scan("strcpy(dst, src);");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "strcpy");
        assert_eq!(hits[0].level, 4);
        assert_eq!(hits[0].line, Some(1));
        assert_eq!(hits[0].context, "strcpy(dst, src);");
        assert_eq!(hits[0].cwe.as_deref(), Some("CWE-120"));
    }

    #[test]
    fn strcpy_from_constant_drops_to_one() {
        assert_eq!(levels(r#"strcpy(dst, "fixed");"#), vec![("strcpy".to_string(), 1)]);
    }

    #[test]
    fn printf_with_constant_format_is_informational() {
        assert_eq!(levels(r#"printf("%d\n", n);"#), vec![("printf".to_string(), 0)]);
        assert_eq!(levels("printf(user);"), vec![("printf".to_string(), 4)]);
    }

    #[test]
    fn fprintf_checks_second_argument() {
        assert_eq!(levels(r#"fprintf(stderr, "oops");"#), vec![("fprintf".to_string(), 0)]);
        assert_eq!(levels("fprintf(stderr, msg);"), vec![("fprintf".to_string(), 4)]);
    }

    #[test]
    fn sprintf_without_string_conversion_drops_to_one() {
        assert_eq!(levels(r#"sprintf(buf, "%d", n);"#), vec![("sprintf".to_string(), 1)]);
        assert_eq!(levels(r#"sprintf(buf, "%s", name);"#), vec![("sprintf".to_string(), 4)]);
        assert_eq!(levels(r#"sprintf(buf, "%.8s", name);"#), vec![("sprintf".to_string(), 1)]);
    }

    #[test]
    fn scanf_with_bounded_format_drops_to_one() {
        assert_eq!(levels(r#"scanf("%d", &n);"#), vec![("scanf".to_string(), 1)]);
        assert_eq!(levels(r#"scanf("%s", buf);"#), vec![("scanf".to_string(), 4)]);
        assert_eq!(levels(r#"sscanf(in, "%[^,]", buf);"#), vec![("sscanf".to_string(), 4)]);
    }

    #[test]
    fn identifier_without_call_is_ignored() {
        assert!(scan("int (*copy)(char *, const char *) = strcpy;").is_empty());
        assert!(scan("my_strcpy(a, b);").is_empty());
    }

    #[test]
    fn identifiers_inside_literals_are_ignored() {
        let hits = scan(r#"log_msg("call strcpy(a, b) here");"#);
        assert!(hits.is_empty());
    }

    #[test]
    fn static_char_array_is_flagged() {
        assert_eq!(levels("char buf[256];"), vec![("char".to_string(), 2)]);
        assert_eq!(levels("unsigned char key [ KEY_LEN ];"), vec![("char".to_string(), 2)]);
    }

    #[test]
    fn pointers_and_open_arrays_are_not_static_arrays() {
        assert!(scan("char *name;").is_empty());
        assert!(scan("char name[] = \"x\";").is_empty());
        assert!(scan("char c;").is_empty());
    }

    #[test]
    fn lines_are_numbered_from_one() {
        let hits = scan("int x = 0;\ngets(line);\nsystem(cmd);");
        let lines: Vec<_> = hits.iter().map(|h| (h.name.as_str(), h.line)).collect();
        assert_eq!(lines, vec![("gets", Some(2)), ("system", Some(3))]);
    }

    #[test]
    fn several_calls_on_one_line_produce_several_hits() {
        let names: Vec<_> = scan("strcat(a, b); strlen(a);").into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["strcat", "strlen"]);
    }

    #[test]
    fn split_args_respects_nesting_and_literals() {
        assert_eq!(split_args(r#"buf, f(a, b), "x,y") + 1"#), vec!["buf", "f(a, b)", r#""x,y""#]);
        assert_eq!(split_args("a, b"), vec!["a", "b"]);
        assert!(split_args(")").is_empty());
    }

    #[test]
    fn string_literal_prefixes_are_recognised() {
        assert!(is_string_literal(r#""abc""#));
        assert!(is_string_literal(r#"L"abc""#));
        assert!(is_string_literal(r#""a" "b""#));
        assert!(!is_string_literal("name"));
        assert!(!is_string_literal("\""));
    }
}
