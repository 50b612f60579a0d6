use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line interface definition.
///
/// The censoring default (`*?`) lives in [`crate::config::Config`] so the
/// `EMDOFI_CENSORED` environment variable can override it.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "emdofi",
    author,
    version,
    about = "EMDOFI - Uncover a censored domain"
)]
pub struct Cli {
    /// The censored domain or email
    pub domain: String,

    /// The censored characters (default: "*?")
    #[arg(short = 'c', long = "censored", value_name = "CC")]
    pub censored: Option<String>,

    /// Catalog file to search instead of the bundled provider list
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Keep catalog entries that are not valid domains
    #[arg(long = "keep-invalid", default_value_t = false)]
    pub keep_invalid: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::parse_from(["emdofi", "j***@g****.**m"]);
        assert_eq!(cli.domain, "j***@g****.**m");
        assert!(cli.censored.is_none());
        assert!(cli.catalog.is_none());
        assert!(!cli.keep_invalid);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_parse_long_censored() {
        let cli = Cli::parse_from(["emdofi", "g####.##m", "--censored", "#"]);
        assert_eq!(cli.censored.as_deref(), Some("#"));
    }

    #[test]
    fn test_verbosity_count() {
        assert_eq!(Cli::parse_from(["emdofi", "x", "-v"]).log_level(), "debug");
        assert_eq!(Cli::parse_from(["emdofi", "x", "-vv"]).log_level(), "trace");
    }

    #[test]
    fn test_domain_is_required() {
        assert!(Cli::try_parse_from(["emdofi"]).is_err());
    }
}
