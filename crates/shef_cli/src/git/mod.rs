//! Git repository access for history mining.
//!
//! `gix` opens repositories and walks history; `git2` produces line diffs
//! and clones remotes.

mod local;
mod patch;
mod remote;
mod types;

use std::path::{Path, PathBuf};

use gix::ThreadSafeRepository;
use shef_core::HistoryError;
use tempfile::TempDir;

use self::local::LocalRepo;
pub use self::patch::PatchReader;
use self::remote::{clone_into_temp, is_remote};
pub use self::types::{CommitHeader, WalkOptions};

/// Thread-safe handle to an opened git repository.
#[derive(Debug)]
pub struct Repo {
    inner: ThreadSafeRepository,
    git_dir: PathBuf,
    /// Keeps a cloned remote alive for as long as the handle exists.
    _clone: Option<TempDir>,
}

impl Repo {
    /// Opens `repo`, cloning it first when it is a URL.
    pub fn acquire(repo: &str) -> anyhow::Result<Self> {
        if is_remote(repo) {
            let dir = clone_into_temp(repo)?;
            let path = dir.path().to_path_buf();
            return Self::open_with(&path, repo, Some(dir));
        }

        Self::open(Path::new(repo), repo)
    }

    /// Opens the repository at `path`; `display` names it in errors.
    pub fn open(path: &Path, display: &str) -> anyhow::Result<Self> {
        Self::open_with(path, display, None)
    }

    fn open_with(path: &Path, display: &str, clone: Option<TempDir>) -> anyhow::Result<Self> {
        let repo = gix::open(path).map_err(|err| {
            anyhow::Error::new(err).context(HistoryError::RepositoryNotFound {
                repo: display.to_string(),
            })
        })?;

        Ok(Self {
            git_dir: repo.path().to_path_buf(),
            inner: repo.into_sync(),
            _clone: clone,
        })
    }

    /// Creates a thread-local handle for walking history.
    fn thread_local(&self) -> LocalRepo {
        LocalRepo {
            inner: self.inner.to_thread_local(),
        }
    }

    /// Opens a diff reader for use within one worker.
    pub fn patch_reader(&self) -> anyhow::Result<PatchReader> {
        PatchReader::open(&self.git_dir)
    }

    /// Returns `true` if this is a shallow clone with truncated history.
    #[must_use]
    pub fn is_shallow(&self) -> bool {
        self.inner.to_thread_local().is_shallow()
    }

    /// Collects commit headers matching the walk options.
    pub fn collect_commits(&self, opts: &WalkOptions) -> anyhow::Result<Vec<CommitHeader>> {
        self.thread_local().collect_commits(opts)
    }
}
