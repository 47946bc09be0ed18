//! Cloning remote repositories into a temporary directory.

use shef_core::HistoryError;
use tempfile::TempDir;
#[cfg(feature = "tracing")]
use tracing::info;

/// Returns `true` if `repo` names a remote (`scheme://...` or `git@...`).
#[must_use]
pub fn is_remote(repo: &str) -> bool {
    repo.starts_with("git@")
        || repo
            .split_once("://")
            .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(is_scheme_char))
}

const fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Clones `url` into a fresh temporary directory.
///
/// The directory is removed when the returned handle is dropped.
pub fn clone_into_temp(url: &str) -> anyhow::Result<TempDir> {
    let dir = tempfile::Builder::new().prefix("shefmine-").tempdir()?;

    #[cfg(feature = "tracing")]
    info!(url, path = %dir.path().display(), "cloning");

    git2::Repository::clone(url, dir.path()).map_err(|err| {
        anyhow::Error::new(err).context(HistoryError::RepositoryNotFound { repo: url.to_string() })
    })?;

    Ok(dir)
}
