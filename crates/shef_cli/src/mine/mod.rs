//! Mining command - finds vulnerability-related commits in git history.

mod context;
mod output;
mod scanner;

use std::io::IsTerminal as _;
use std::time::Instant;

use anyhow::Context as _;
#[cfg(feature = "tracing")]
use tracing::debug;

use self::context::MineContext;
use self::output::{resolve_target, write_report};
use self::scanner::mine_history;
use crate::Cli;
use crate::git::{Repo, WalkOptions};
use crate::ui::{format_seconds, print_summary, print_warning};

/// Executes a mining run.
///
/// Fatal errors (bad repository, bad revision, bad configuration,
/// unwritable output) abort before any report file is written.
pub fn run(args: &Cli) -> anyhow::Result<()> {
    configure_thread_pool(args.concurrency)?;

    let start = Instant::now();
    let context = MineContext::load(args)?;

    let target = resolve_target(args.output.as_deref());
    if target.extension_changed {
        print_warning("Output file extension has been automatically changed to .json");
    }

    let repo = Repo::acquire(&args.repo)?;

    let options = WalkOptions {
        branch: args.branch.clone(),
        single: args.single.clone(),
        reverse: args.reverse,
        no_merge: args.no_merge,
    };

    let show_progress = !args.quiet && std::io::stderr().is_terminal();
    let result = mine_history(&repo, &context.analyzer, &options, show_progress)?;

    #[cfg(feature = "tracing")]
    debug!(
        walked = result.commits_walked,
        classified = result.commits_classified,
        reported = result.report.len(),
        findings = result.report.finding_count(),
        "mining finished"
    );

    let location = write_report(&target.path, &result.report)?;

    print_summary("Issues found", result.report.len());
    print_summary("Output location", location.display());
    print_summary("Time taken", format_seconds(start.elapsed()));

    Ok(())
}

fn configure_thread_pool(concurrency: Option<usize>) -> anyhow::Result<()> {
    if let Some(n) = concurrency {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("failed to configure thread pool")?;
    }
    Ok(())
}
