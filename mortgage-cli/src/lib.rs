pub mod cli;
pub mod config;
pub mod logging;
pub mod render;

use anyhow::{Context, Result};
use mortgage_core::{CalculatorSession, LoanProfileCatalog};
use tracing::debug;

use cli::{CalculateArgs, Command};
use config::AppConfig;

/// Executes `command` and returns the report to print.
pub fn run(
    command: &Command,
    config: &AppConfig,
) -> Result<String> {
    match command {
        Command::Profiles => render::render_profiles(&LoanProfileCatalog::new())
            .context("Failed to render loan profiles"),
        Command::Calculate(args) => calculate(args, config),
    }
}

fn calculate(
    args: &CalculateArgs,
    config: &AppConfig,
) -> Result<String> {
    let mut session = CalculatorSession::new(config.defaults);
    session
        .select_profile(args.profile)
        .with_context(|| format!("Failed to select loan profile {}", args.profile))?;

    let raw = args.raw_inputs();
    debug!(?raw, "calculating");
    let pass = session
        .recalculate(&raw)
        .context("Failed to calculate payment breakdown")?;

    render::render_pass(session.selected_profile(), &pass)
        .context("Failed to render payment breakdown")
}
