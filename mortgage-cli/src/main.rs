use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use mortgage_cli::cli::Cli;
use mortgage_cli::config::AppConfig;
use mortgage_cli::{logging, run};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };

    logging::init_logging(cli.log_level.as_deref(), &config.logging.level)?;
    if let Some(path) = &cli.config {
        info!(config = %path.display(), "loaded configuration");
    }

    let report = run(&cli.command, &config)?;
    print!("{report}");

    Ok(())
}
