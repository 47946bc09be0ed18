//! Back-end that shells out to the `flawfinder` executable.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "tracing")]
use tracing::trace;

use super::{CScanner, Hit};
use crate::error::ScannerError;

/// One `--singleline` report line: `file:line[:col]:  [level] (category) name:warning`.
static REPORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "static regex is known-valid at compile time")]
    Regex::new(
        r"^(?P<file>.+?):(?P<line>\d+):(?:(?P<column>\d+):)?\s+\[(?P<level>[0-5])\]\s+\((?P<category>[^)]*)\)\s+(?P<name>[^:\s]+):\s*(?P<warning>.*)$",
    )
    .unwrap()
});

static CWE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "static regex is known-valid at compile time")]
    Regex::new(r"\((CWE-[^)]*)\)").unwrap()
});

const MAX_LABEL_LEN: usize = 48;

/// Runs `flawfinder` on a fresh temporary `.c` file per call.
#[derive(Debug, Clone)]
pub struct FlawfinderScanner {
    program: PathBuf,
}

impl FlawfinderScanner {
    /// Creates a scanner that runs `program`.
    #[must_use]
    pub fn new(program: &Path) -> Self {
        Self {
            program: program.to_path_buf(),
        }
    }
}

impl CScanner for FlawfinderScanner {
    fn name(&self) -> &'static str {
        "flawfinder"
    }

    fn scan(&self, buffer: &str, label: &str) -> Result<Vec<Hit>, ScannerError> {
        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}_", sanitize_label(label)))
            .suffix(".c")
            .tempfile()
            .map_err(|source| ScannerError::Buffer { source })?;
        file.write_all(buffer.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| ScannerError::Buffer { source })?;

        let output = Command::new(&self.program)
            .args(["--singleline", "--dataonly", "--quiet", "--minlevel=0"])
            .arg(file.path())
            .output()
            .map_err(|source| ScannerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScannerError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);

        #[cfg(feature = "tracing")]
        trace!(label, bytes = stdout.len(), "flawfinder finished");

        parse_report(&stdout, buffer)
    }
}

/// Parses flawfinder's single-line report, taking hit context from `buffer`.
pub(crate) fn parse_report(report: &str, buffer: &str) -> Result<Vec<Hit>, ScannerError> {
    let buffer_lines: Vec<&str> = buffer.lines().collect();

    report
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let malformed = || ScannerError::Malformed { line: line.to_string() };
            let caps = REPORT_LINE.captures(line).ok_or_else(malformed)?;

            let number: usize = caps["line"].parse().ok().ok_or_else(malformed)?;
            let level: u8 = caps["level"].parse().ok().ok_or_else(malformed)?;
            let warning = caps["warning"].trim().to_string();
            let cwe = CWE_REFERENCE.captures(&warning).map(|c| c[1].to_string());
            let context = number
                .checked_sub(1)
                .and_then(|idx| buffer_lines.get(idx))
                .map(|text| (*text).to_string())
                .unwrap_or_default();

            Ok(Hit {
                name: caps["name"].to_string(),
                level,
                category: caps["category"].to_string(),
                cwe,
                warning,
                line: Some(number),
                context,
            })
        })
        .collect()
}

fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_LABEL_LEN)
        .collect()
}
