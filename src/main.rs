use std::io;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use emdofi::cli::Cli;
use emdofi::config::Config;
use emdofi::output::write_report;
use emdofi::{DomainFinder, Result};

fn init_logging(cli: &Cli) {
    // EMDOFI_LOG takes precedence over -v.
    let filter = EnvFilter::try_from_env("EMDOFI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::from_args();
    init_logging(&cli);

    let mut config = Config::from_env();
    config.merge_with_cli(&cli);
    config.validate()?;
    debug!(?config, "configuration resolved");

    let finder = DomainFinder::new(Some(config.catalog_source()), config.finder_options())?;
    let found = finder.find(cli.domain.as_str());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &cli.domain, &found)?;
    Ok(())
}
