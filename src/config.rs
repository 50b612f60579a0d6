//! Runtime configuration for the `emdofi` binary.
//!
//! Values come from environment variables first, then command-line flags
//! override them.

use std::path::PathBuf;

use crate::catalog::CatalogSource;
use crate::cli::Cli;
use crate::error::{FinderError, Result};
use crate::finder::{FinderOptions, DEFAULT_CACHE_SIZE};

/// Censoring characters used by the command line when none are given.
pub const DEFAULT_CLI_CENSORED: &str = "*?";

/// Binary configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Custom catalog file; the bundled list is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Censoring characters, decomposed into single characters
    pub censored: String,
    /// Keep catalog entries that fail validation
    pub keep_invalid: bool,
    /// Report cache size
    pub cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            censored: DEFAULT_CLI_CENSORED.to_string(),
            keep_invalid: false,
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from `EMDOFI_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("EMDOFI_CATALOG") {
            if !path.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(censored) = std::env::var("EMDOFI_CENSORED") {
            config.censored = censored;
        }

        if let Ok(keep) = std::env::var("EMDOFI_KEEP_INVALID") {
            config.keep_invalid = keep.eq_ignore_ascii_case("true")
                || keep.eq_ignore_ascii_case("1")
                || keep.eq_ignore_ascii_case("yes");
        }

        if let Ok(size) = std::env::var("EMDOFI_CACHE_SIZE") {
            if let Ok(size) = size.parse::<usize>() {
                config.cache_size = size;
            }
        }

        config
    }

    /// Apply command-line flags on top of this configuration.
    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(ref path) = cli.catalog {
            self.catalog_path = Some(path.clone());
        }
        if let Some(ref censored) = cli.censored {
            self.censored = censored.clone();
        }
        if cli.keep_invalid {
            self.keep_invalid = true;
        }
    }

    /// Reject configurations that cannot produce a usable finder.
    pub fn validate(&self) -> Result<()> {
        if self.censored.is_empty() {
            return Err(FinderError::ConfigError(
                "censoring characters must not be empty".to_string(),
            ));
        }
        if let Some(ref path) = self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(FinderError::ConfigError(
                    "catalog path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Catalog source selected by this configuration.
    pub fn catalog_source(&self) -> CatalogSource {
        match self.catalog_path {
            Some(ref path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Embedded,
        }
    }

    /// Finder options selected by this configuration.
    pub fn finder_options(&self) -> FinderOptions {
        FinderOptions::new()
            .with_censoring_chars([self.censored.as_str()])
            .with_keep_only_valid(!self.keep_invalid)
            .with_cache_size(self.cache_size)
    }
}
