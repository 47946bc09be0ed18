//! # shefmine
//!
//! Mines the history of a git repository for commits that look like they
//! fix or introduce security vulnerabilities, and pinpoints insecure
//! patterns in the lines those commits change.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod git;
mod mine;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use console::style;
pub use shef_core::CONFIG_FILENAME;
use shef_core::ScannerKind;

use crate::ui::colors;

fn parse_scanner(s: &str) -> Result<ScannerKind, String> {
    s.parse()
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "shefmine",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path or URL of the Git repository.
    pub repo: String,

    /// Only analyse the commits in this branch.
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Only analyse the provided commit (full hash).
    #[arg(short, long, value_name = "HASH")]
    pub single: Option<String>,

    /// Write the result to this file or directory (default: ./output.json).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not include merge commits.
    #[arg(long)]
    pub no_merge: bool,

    /// Analyse the commits from oldest to newest.
    #[arg(long)]
    pub reverse: bool,

    /// Path to `.shefmine.toml` configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of parallel analysis threads.
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Drop classified commits that have no file-level findings.
    #[arg(long)]
    pub drop_empty: bool,

    /// C/C++ scanner back-end (builtin or flawfinder).
    #[arg(long, value_name = "NAME", value_parser = parse_scanner)]
    pub scanner: Option<ScannerKind>,

    /// Do not show the progress bar.
    #[arg(short, long)]
    pub quiet: bool,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = mine::run(&cli) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn build_about() -> String {
    format!(
        r"
  {} mines git history for vulnerability-related commits.

  Commit messages are matched against a vulnerability taxonomy; the
  changed lines of matching commits are scanned for insecure patterns.",
        colors::accent().apply_to("shefmine").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    shefmine .                          Mine the current repository
    shefmine ../project -b main         Only commits reachable from main
    shefmine . -s <HASH>                Analyse a single commit
    shefmine https://host/repo.git      Clone and mine a remote repository
    shefmine . -o reports/              Write reports/output.json
    shefmine . --drop-empty             Keep only commits with findings",
        style("Examples:").bold(),
    )
}
