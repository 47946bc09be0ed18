//! Report file placement and writing.

use std::fs;
use std::path::{self, Path, PathBuf};

use anyhow::Context as _;
use shef_core::fs_util::atomic_write;
use shef_core::prelude::*;

/// File name used when no output file is named.
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

const JSON_EXTENSION: &str = "json";

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Path of the report file.
    pub path: PathBuf,
    /// The requested extension was replaced by `.json`.
    pub extension_changed: bool,
}

/// Resolves the `--output` argument.
///
/// No argument means `output.json` in the working directory. A path
/// without extension, or ending in a separator, is a directory receiving
/// `output.json`. Any extension other than `.json` is replaced by `.json`.
#[must_use]
pub fn resolve_target(output: Option<&Path>) -> OutputTarget {
    let Some(output) = output else {
        return OutputTarget {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            extension_changed: false,
        };
    };

    let names_directory = output.as_os_str().to_string_lossy().ends_with(path::is_separator);

    match output.extension() {
        _ if names_directory => OutputTarget {
            path: output.join(DEFAULT_OUTPUT_FILE),
            extension_changed: false,
        },
        None => OutputTarget {
            path: output.join(DEFAULT_OUTPUT_FILE),
            extension_changed: false,
        },
        Some(ext) if ext == JSON_EXTENSION => OutputTarget {
            path: output.to_path_buf(),
            extension_changed: false,
        },
        Some(_) => OutputTarget {
            path: output.with_extension(JSON_EXTENSION),
            extension_changed: true,
        },
    }
}

/// Writes `report` as pretty JSON and returns the file's absolute path.
///
/// Missing parent directories are created.
pub fn write_report(path: &Path, report: &Report) -> anyhow::Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let json = report.to_json_pretty().context("failed to serialise report")?;
    atomic_write(path, &json).with_context(|| format!("failed to write output file: {}", path.display()))?;

    fs::canonicalize(path).with_context(|| format!("failed to resolve output path: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_output_json() {
        let target = resolve_target(None);
        assert_eq!(target.path, PathBuf::from("output.json"));
        assert!(!target.extension_changed);
    }

    #[test]
    fn json_extension_is_kept() {
        let target = resolve_target(Some(Path::new("results/run.json")));
        assert_eq!(target.path, PathBuf::from("results/run.json"));
        assert!(!target.extension_changed);
    }

    #[test]
    fn other_extension_is_rewritten() {
        let target = resolve_target(Some(Path::new("results/run.txt")));
        assert_eq!(target.path, PathBuf::from("results/run.json"));
        assert!(target.extension_changed);

        let target = resolve_target(Some(Path::new("run.JSON")));
        assert_eq!(target.path, PathBuf::from("run.json"));
        assert!(target.extension_changed);
    }

    #[test]
    fn path_without_extension_is_a_directory() {
        let target = resolve_target(Some(Path::new("reports")));
        assert_eq!(target.path, PathBuf::from("reports/output.json"));
        assert!(!target.extension_changed);
    }

    #[test]
    fn trailing_separator_is_a_directory() {
        let target = resolve_target(Some(Path::new("reports.v2/")));
        assert_eq!(target.path, PathBuf::from("reports.v2").join("output.json"));
        assert!(!target.extension_changed);
    }

    #[test]
    fn write_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("output.json");

        let written = write_report(&path, &Report::new()).unwrap();

        assert!(written.is_absolute());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
