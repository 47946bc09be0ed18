//! Mining context - configuration loading and analyzer construction.

use std::path::Path;

use anyhow::Context as _;
use shef_core::prelude::*;

use crate::{CONFIG_FILENAME, Cli};

/// Everything the miner needs besides the repository.
#[derive(Debug)]
pub struct MineContext {
    /// The per-commit analysis pipeline, built from the effective configuration.
    pub analyzer: Analyzer,
}

impl MineContext {
    /// Loads configuration, applies command-line overrides and builds the analyzer.
    pub fn load(args: &Cli) -> anyhow::Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(Path::new(CONFIG_FILENAME));
        let config = apply_overrides(Config::load(config_path).context("loading config")?, args);

        let analyzer = Analyzer::from_config(&config).context("invalid configuration")?;

        Ok(Self { analyzer })
    }
}

fn apply_overrides(mut config: Config, args: &Cli) -> Config {
    if args.drop_empty {
        config.drop_empty_commits = true;
    }
    if let Some(scanner) = args.scanner {
        config.scanner = scanner;
    }
    config
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[test]
    fn flags_override_configuration() {
        let args = Cli::parse_from(["shefmine", ".", "--drop-empty", "--scanner", "flawfinder"]);
        let config = apply_overrides(Config::default(), &args);
        assert!(config.drop_empty_commits);
        assert_eq!(config.scanner, ScannerKind::Flawfinder);
    }

    #[test]
    fn absent_flags_keep_configuration() {
        let args = Cli::parse_from(["shefmine", "."]);
        let base = Config {
            drop_empty_commits: true,
            scanner: ScannerKind::Flawfinder,
            ..Config::default()
        };
        let config = apply_overrides(base.clone(), &args);
        assert_eq!(config, base);
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let args = Cli::parse_from(["shefmine", ".", "--config", path.to_str().unwrap()]);
        let context = MineContext::load(&args).unwrap();
        assert!(!context.analyzer.drops_empty());
        assert_eq!(context.analyzer.c_adapter().scanner().name(), "builtin");
    }

    #[test]
    fn invalid_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "minimum_level = 9\n").unwrap();
        let args = Cli::parse_from(["shefmine", ".", "--config", path.to_str().unwrap()]);
        assert!(MineContext::load(&args).is_err());
    }
}
