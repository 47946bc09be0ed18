//! Line-level diffs of a commit against its first parent.

use std::path::Path;

use anyhow::Context as _;
use git2::{Delta, DiffFindOptions, DiffOptions, Oid, Patch, Repository};
use shef_core::{ChangeType, Diff, DiffLine, FileModification};

/// Reads file modifications through its own `git2` handle.
///
/// `git2::Repository` is not `Sync`, so every worker opens its own reader.
pub struct PatchReader {
    repo: Repository,
}

impl std::fmt::Debug for PatchReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatchReader").field("path", &self.repo.path()).finish()
    }
}

impl PatchReader {
    /// Opens the repository whose git directory is `git_dir`.
    pub fn open(git_dir: &Path) -> anyhow::Result<Self> {
        let repo = Repository::open(git_dir)
            .with_context(|| format!("failed to open repository at {}", git_dir.display()))?;
        Ok(Self { repo })
    }

    /// Returns the file modifications of commit `hash`.
    ///
    /// Merge commits carry no modifications. Root commits are compared with
    /// the empty tree. Renames are detected; diffs have no context lines.
    pub fn modifications(&self, hash: &str) -> anyhow::Result<Vec<FileModification>> {
        let oid = Oid::from_str(hash).with_context(|| format!("invalid commit hash '{hash}'"))?;
        let commit = self
            .repo
            .find_commit(oid)
            .with_context(|| format!("failed to read commit {hash}"))?;

        if commit.parent_count() > 1 {
            return Ok(Vec::new());
        }

        let tree = commit.tree()?;
        let parent_tree = match commit.parent_count() {
            0 => None,
            _ => Some(commit.parent(0)?.tree()?),
        };

        let mut opts = DiffOptions::new();
        opts.context_lines(0).ignore_filemode(true);

        let mut diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))
            .with_context(|| format!("failed to diff commit {hash}"))?;

        let mut find = DiffFindOptions::new();
        find.renames(true);
        diff.find_similar(Some(&mut find))?;

        let mut modifications = Vec::with_capacity(diff.deltas().len());
        for (idx, delta) in diff.deltas().enumerate() {
            let change_type = change_type(delta.status());
            let old_path = path_string(delta.old_file().path());
            let new_path = path_string(delta.new_file().path());

            let lines = match Patch::from_diff(&diff, idx)? {
                Some(patch) => read_patch(&patch)?,
                None => Diff::default(),
            };

            modifications.push(FileModification {
                old_path: (change_type != ChangeType::Add).then_some(old_path).flatten(),
                new_path: (change_type != ChangeType::Delete).then_some(new_path).flatten(),
                change_type,
                diff: lines,
            });
        }

        Ok(modifications)
    }
}

const fn change_type(status: Delta) -> ChangeType {
    match status {
        Delta::Added => ChangeType::Add,
        Delta::Deleted => ChangeType::Delete,
        Delta::Renamed => ChangeType::Rename,
        _ => ChangeType::Modify,
    }
}

fn path_string(path: Option<&Path>) -> Option<String> {
    path.map(|p| p.to_string_lossy().replace('\\', "/"))
}

fn read_patch(patch: &Patch<'_>) -> Result<Diff, git2::Error> {
    let mut diff = Diff::default();

    for hunk in 0..patch.num_hunks() {
        for idx in 0..patch.num_lines_in_hunk(hunk)? {
            let line = patch.line_in_hunk(hunk, idx)?;
            let side = match line.origin() {
                '+' => line.new_lineno().map(|n| (&mut diff.added, n)),
                '-' => line.old_lineno().map(|n| (&mut diff.deleted, n)),
                _ => None,
            };
            if let Some((side, number)) = side {
                side.push(DiffLine::new(number as usize, line_text(line.content())));
            }
        }
    }

    Ok(diff)
}

/// Decodes a diff line and removes its terminator.
fn line_text(content: &[u8]) -> String {
    let text = String::from_utf8_lossy(content);
    let text = text.strip_suffix('\n').unwrap_or(&*text);
    text.strip_suffix('\r').unwrap_or(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_terminators_are_removed() {
        assert_eq!(line_text(b"  strcpy(dst, src);\n"), "  strcpy(dst, src);");
        assert_eq!(line_text(b"x = 1;\r\n"), "x = 1;");
        assert_eq!(line_text(b"no newline"), "no newline");
        assert_eq!(line_text(b"   \n"), "   ");
    }

    #[test]
    fn delta_status_maps_to_change_type() {
        assert_eq!(change_type(Delta::Added), ChangeType::Add);
        assert_eq!(change_type(Delta::Deleted), ChangeType::Delete);
        assert_eq!(change_type(Delta::Renamed), ChangeType::Rename);
        assert_eq!(change_type(Delta::Modified), ChangeType::Modify);
        assert_eq!(change_type(Delta::Typechange), ChangeType::Modify);
    }
}
