use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mortgage_core::RawInputs;

/// Estimated monthly mortgage payment calculator.
///
/// Breaks a payment down into principal & interest, mortgage insurance,
/// homeowner's insurance and taxes for a USDA, FHA or traditional loan.
#[derive(Debug, Parser)]
#[command(name = "mortgage-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter (e.g. `debug` or `mortgage_core=trace`); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available loan profiles
    Profiles,

    /// Calculate the monthly payment breakdown
    Calculate(CalculateArgs),
}

/// Field values are taken as typed; anything unusable falls back to a default.
#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// Loan profile index (0 = USDA, 1 = FHA, 2 = TRADITIONAL)
    #[arg(short, long, default_value_t = 0)]
    pub profile: usize,

    /// Purchase amount in whole dollars
    #[arg(long, allow_hyphen_values = true)]
    pub loan_amount: Option<String>,

    /// Down payment in percent
    #[arg(long, allow_hyphen_values = true)]
    pub down_payment: Option<String>,

    /// Annual interest rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub interest_rate: Option<String>,

    /// Loan term in years
    #[arg(long, allow_hyphen_values = true)]
    pub term: Option<String>,

    /// Property taxes per year in whole dollars
    #[arg(long, allow_hyphen_values = true)]
    pub taxes: Option<String>,

    /// Annual homeowner's insurance in percent of the loan amount
    #[arg(long, allow_hyphen_values = true)]
    pub insurance_rate: Option<String>,
}

impl CalculateArgs {
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            loan_amount: self.loan_amount.clone(),
            down_payment: self.down_payment.clone(),
            interest_rate: self.interest_rate.clone(),
            term_years: self.term.clone(),
            annual_taxes: self.taxes.clone(),
            insurance_rate: self.insurance_rate.clone(),
        }
    }
}
