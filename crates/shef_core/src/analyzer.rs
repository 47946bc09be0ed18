//! Per-commit classification and changed-line analysis.

use globset::GlobSet;
#[cfg(feature = "tracing")]
use tracing::{debug, trace, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::diff::{Commit, FileModification};
use crate::error::ShefError;
use crate::filter::filter_lines;
use crate::matcher::match_lines;
use crate::profile::ProfileRegistry;
use crate::report::{CommitReport, FileReport, SideFindings, VulnerabilityMatch};
use crate::scanner::{self, CAdapter, CScanner};

/// Runs the classification pipeline over commits.
///
/// Holds the compiled catalog and language profiles, the C/C++ scanner
/// adapter, the path exclusions and the empty-commit policy. Everything is
/// immutable after construction, so one analyzer can be shared across
/// threads.
#[derive(Debug)]
pub struct Analyzer {
    catalog: Catalog,
    profiles: ProfileRegistry,
    c_adapter: CAdapter,
    exclusions: GlobSet,
    drop_empty: bool,
}

impl Analyzer {
    /// Builds an analyzer from configuration.
    pub fn from_config(config: &Config) -> Result<Self, ShefError> {
        config.validate()?;

        Ok(Self {
            catalog: Catalog::from_config(config)?,
            profiles: ProfileRegistry::builtin()?,
            c_adapter: CAdapter::new(scanner::from_config(config), config.minimum_level),
            exclusions: config.compile_exclusions()?,
            drop_empty: config.drop_empty_commits,
        })
    }

    /// Replaces the C/C++ scanner back-end, keeping the minimum level.
    #[must_use]
    pub fn with_scanner(mut self, scanner: Box<dyn CScanner>) -> Self {
        self.c_adapter = CAdapter::new(scanner, self.c_adapter.minimum_level());
        self
    }

    /// Sets whether classified commits without findings are dropped.
    #[must_use]
    pub const fn with_drop_empty(mut self, drop_empty: bool) -> Self {
        self.drop_empty = drop_empty;
        self
    }

    /// Returns the vulnerability catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the C/C++ scanner adapter.
    #[must_use]
    pub const fn c_adapter(&self) -> &CAdapter {
        &self.c_adapter
    }

    /// Returns `true` if classified commits without findings are dropped.
    #[must_use]
    pub const fn drops_empty(&self) -> bool {
        self.drop_empty
    }

    /// Classifies a raw commit message against the catalog.
    #[must_use]
    pub fn classify(&self, message: &str) -> Vec<VulnerabilityMatch> {
        self.catalog.classify(message)
    }

    /// Analyses one modified file.
    ///
    /// C/C++ files go through the scanner adapter; files of a known language
    /// go through the rule matcher. Excluded and unsupported files are
    /// skipped, and so are files whose scan failed. Returns `None` when the
    /// file has no findings.
    #[must_use]
    pub fn analyze_file(&self, modification: &FileModification, commit_hash: &str) -> Option<FileReport> {
        let path = modification.path();
        if path.is_empty() {
            return None;
        }

        if self.exclusions.is_match(path) {
            #[cfg(feature = "tracing")]
            trace!(path, "excluded by configuration");
            return None;
        }

        let Some(ext) = modification.extension() else {
            #[cfg(feature = "tracing")]
            trace!(path, "no extension, skipping");
            return None;
        };

        let findings = if shef_rules::is_c_extension(ext) {
            match self.c_adapter.scan(&modification.diff, commit_hash, path) {
                Ok(findings) => findings,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    warn!(commit = commit_hash, path, error = %err, "scanner failed, skipping file");
                    #[cfg(not(feature = "tracing"))]
                    let _ = err;
                    return None;
                }
            }
        } else if let Some(profile) = self.profiles.for_extension(ext) {
            SideFindings {
                added: match_lines(&filter_lines(&modification.diff.added, Some(profile)), profile),
                deleted: match_lines(&filter_lines(&modification.diff.deleted, Some(profile)), profile),
            }
        } else {
            #[cfg(feature = "tracing")]
            trace!(path, "unsupported file type");
            return None;
        };

        FileReport::from_findings(path, findings)
    }

    /// Analyses every modification of a commit, keeping modification order.
    #[must_use]
    pub fn analyze_files(&self, modifications: &[FileModification], commit_hash: &str) -> Vec<FileReport> {
        modifications
            .iter()
            .filter_map(|modification| self.analyze_file(modification, commit_hash))
            .collect()
    }

    /// Builds the report entry for a commit.
    ///
    /// Unclassified commits never produce an entry. Classified commits
    /// without file findings are kept unless the analyzer drops empty
    /// commits.
    #[must_use]
    pub fn aggregate(
        &self,
        hash: &str,
        message: &str,
        vulnerabilities: Vec<VulnerabilityMatch>,
        files_changed: Vec<FileReport>,
    ) -> Option<CommitReport> {
        if vulnerabilities.is_empty() {
            return None;
        }

        if files_changed.is_empty() && self.drop_empty {
            #[cfg(feature = "tracing")]
            debug!(commit = hash, "dropping classified commit without findings");
            return None;
        }

        Some(CommitReport {
            hash: hash.to_string(),
            message: message.to_string(),
            vulnerabilities,
            files_changed,
        })
    }

    /// Analyses the diffs of a commit whose message already classified.
    ///
    /// `vulnerabilities` is the result of [`Analyzer::classify`] on the
    /// commit's message; an empty list yields no entry without touching the
    /// diffs.
    #[must_use]
    pub fn analyze_classified(
        &self,
        commit: &Commit,
        vulnerabilities: Vec<VulnerabilityMatch>,
    ) -> Option<CommitReport> {
        if vulnerabilities.is_empty() {
            return None;
        }

        #[cfg(feature = "tracing")]
        debug!(commit = %commit.hash, categories = vulnerabilities.len(), "commit classified");

        let files = self.analyze_files(&commit.modifications, &commit.hash);
        self.aggregate(&commit.hash, &commit.message, vulnerabilities, files)
    }
}
