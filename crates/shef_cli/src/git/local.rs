//! Thread-local revision walking.

use anyhow::Context as _;
use gix::bstr::ByteSlice as _;
use shef_core::HistoryError;

use super::types::{CommitHeader, WalkOptions};

/// Non-`Send` repository handle for single-threaded git operations.
#[derive(Debug)]
pub struct LocalRepo {
    pub(super) inner: gix::Repository,
}

impl LocalRepo {
    /// Walks the history selected by `opts` and reads each commit's header.
    ///
    /// Commits come newest first (by commit time) unless `opts.reverse` is
    /// set. A repository without any commit yields nothing.
    #[expect(
        clippy::default_trait_access,
        reason = "CommitTimeOrder is a private type in gix; cannot name it explicitly"
    )]
    pub fn collect_commits(&self, opts: &WalkOptions) -> anyhow::Result<Vec<CommitHeader>> {
        if let Some(single) = &opts.single {
            let header = self.header(self.resolve_revision(single)?)?;
            if opts.no_merge && header.is_merge() {
                return Ok(Vec::new());
            }
            return Ok(vec![header]);
        }

        let tip = match &opts.branch {
            Some(branch) => self.resolve_branch(branch)?,
            None => match self.inner.head_id() {
                Ok(id) => id.detach(),
                Err(_unborn) => return Ok(Vec::new()),
            },
        };

        let walk = self
            .inner
            .rev_walk([tip])
            .sorting(gix::revision::walk::Sorting::ByCommitTime(Default::default()));

        let mut headers = Vec::new();
        for info in walk.all().context("failed to start revision walk")? {
            let info = info.context("failed to walk history")?;
            let header = self.header(info.id)?;
            if opts.no_merge && header.is_merge() {
                continue;
            }
            headers.push(header);
        }

        if opts.reverse {
            headers.reverse();
        }

        Ok(headers)
    }

    fn header(&self, id: gix::ObjectId) -> anyhow::Result<CommitHeader> {
        let commit = self
            .inner
            .find_commit(id)
            .with_context(|| format!("failed to read commit {id}"))?;

        let message = commit
            .message_raw()
            .map(|raw| raw.to_str_lossy().trim().to_string())
            .unwrap_or_default();

        Ok(CommitHeader {
            hash: id.to_string(),
            message,
            parent_count: commit.parent_ids().count(),
        })
    }

    /// Resolves a local branch name first, then any revision spec.
    fn resolve_branch(&self, branch: &str) -> anyhow::Result<gix::ObjectId> {
        let refname = format!("refs/heads/{branch}");
        if let Ok(reference) = self.inner.find_reference(&refname)
            && let Some(id) = reference.try_id()
        {
            return Ok(id.detach());
        }

        self.resolve_revision(branch)
    }

    fn resolve_revision(&self, rev: &str) -> anyhow::Result<gix::ObjectId> {
        let spec = format!("{rev}^{{commit}}");
        self.inner
            .rev_parse_single(spec.as_str())
            .map(gix::Id::detach)
            .map_err(|_err| HistoryError::InvalidRevision { rev: rev.to_string() }.into())
    }
}
