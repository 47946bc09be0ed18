//! History mining: sequential classification, parallel diff analysis.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context as _;
use rayon::prelude::*;
use shef_core::prelude::*;
use shef_core::report::VulnerabilityMatch;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::git::{CommitHeader, Repo, WalkOptions};
use crate::ui::{create_commit_progress, print_warning};

/// Smallest number of commits one worker handles at a time.
const MIN_CHUNK_SIZE: usize = 4;

/// A commit whose message matched at least one category.
struct Candidate {
    header: CommitHeader,
    vulnerabilities: Vec<VulnerabilityMatch>,
}

/// Results of a complete mining run.
#[derive(Debug)]
pub struct MineResult {
    /// Report entries in traversal order.
    pub report: Report,
    /// Number of commits walked.
    pub commits_walked: usize,
    /// Number of commits whose message classified.
    pub commits_classified: usize,
}

/// Walks history, classifies every message and analyses the diffs of
/// classified commits.
///
/// Classification runs in traversal order on the calling thread. Diff
/// analysis runs on the rayon pool; each worker opens its own diff reader.
/// Report entries keep traversal order.
pub fn mine_history(
    repo: &Repo,
    analyzer: &Analyzer,
    opts: &WalkOptions,
    show_progress: bool,
) -> anyhow::Result<MineResult> {
    if repo.is_shallow() {
        print_warning(
            "shallow clone detected, mining limited to available commits\nrun `git fetch --unshallow` for full history",
        );
    }

    let headers = repo.collect_commits(opts)?;
    let commits_walked = headers.len();

    let candidates: Vec<Candidate> = headers
        .into_iter()
        .filter_map(|header| {
            let vulnerabilities = analyzer.classify(&header.message);
            (!vulnerabilities.is_empty()).then_some(Candidate {
                header,
                vulnerabilities,
            })
        })
        .collect();
    let commits_classified = candidates.len();

    #[cfg(feature = "tracing")]
    debug!(commits_walked, commits_classified, "classification finished");

    if candidates.is_empty() {
        return Ok(MineResult {
            report: Report::new(),
            commits_walked,
            commits_classified,
        });
    }

    let pb = show_progress.then(|| create_commit_progress(commits_classified));
    let progress = AtomicUsize::new(0);

    let chunk_size = (commits_classified / rayon::current_num_threads().max(1)).clamp(MIN_CHUNK_SIZE, 64);

    let chunks: Vec<Vec<CommitReport>> = candidates
        .par_chunks(chunk_size)
        .map(|chunk| -> anyhow::Result<Vec<CommitReport>> {
            let reader = repo.patch_reader()?;
            let mut reports = Vec::with_capacity(chunk.len());

            for candidate in chunk {
                let hash = &candidate.header.hash;
                let commit = Commit {
                    hash: hash.clone(),
                    message: candidate.header.message.clone(),
                    modifications: reader
                        .modifications(hash)
                        .with_context(|| format!("failed to read changes of commit {hash}"))?,
                };

                if let Some(report) = analyzer.analyze_classified(&commit, candidate.vulnerabilities.clone()) {
                    reports.push(report);
                }

                let completed = progress.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(ref pb) = pb {
                    pb.set_position(completed as u64);
                }
            }

            Ok(reports)
        })
        .collect::<anyhow::Result<_>>()?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(MineResult {
        report: chunks.into_iter().flatten().collect(),
        commits_walked,
        commits_classified,
    })
}
