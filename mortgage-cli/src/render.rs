//! Plain-text rendering of catalog entries and calculation passes.

use std::fmt::{self, Write};

use mortgage_core::calculations::common::{fraction_to_percent, round_half_up};
use mortgage_core::{CalculationPass, InputField, LoanProfile, LoanProfileCatalog};
use rust_decimal::Decimal;

/// Formats an amount as dollars with two decimals, e.g. `$1310.38`.
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", round_half_up(amount))
}

/// Formats a fraction as a percentage with two decimals, e.g. `3.50%`.
pub fn format_percent(fraction: Decimal) -> String {
    format!("{:.2}%", round_half_up(fraction_to_percent(fraction)))
}

pub fn render_profiles(catalog: &LoanProfileCatalog) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (index, profile) in catalog.iter().enumerate() {
        writeln!(out, "[{index}] {} ({})", profile.name, profile.short_name)?;
        writeln!(
            out,
            "    loan fee {}  |  PMI {}  |  minimum down {}  |  est. rate {}",
            format_percent(profile.loan_fee_rate),
            format_percent(profile.standard_pmi_rate),
            format_percent(profile.minimum_down_payment_rate),
            format_percent(profile.fixed_interest_rate_estimate),
        )?;
        writeln!(out, "    {}", profile.description)?;
    }
    Ok(out)
}

pub fn render_pass(
    profile: &LoanProfile,
    pass: &CalculationPass,
) -> Result<String, fmt::Error> {
    let echo = &pass.echo;
    let result = pass.result.rounded();
    let mark = |field: InputField| if echo.was_substituted(field) { " *" } else { "" };

    let mut out = String::new();
    writeln!(out, "{} ({})", profile.name, profile.short_name)?;
    writeln!(out)?;
    writeln!(out, "Inputs")?;
    let rows = [
        ("Loan amount", format!("{}", echo.loan_amount), InputField::LoanAmount),
        (
            "Down payment",
            format!("{:.2}%", echo.down_payment_percent),
            InputField::DownPaymentRate,
        ),
        (
            "Interest rate",
            format!("{:.2}%", echo.interest_rate_percent),
            InputField::InterestRate,
        ),
        ("Term (years)", echo.term_years.to_string(), InputField::TermYears),
        ("Taxes per year", format!("{}", echo.annual_taxes), InputField::AnnualTaxes),
        (
            "Insurance rate",
            format!("{:.2}%", echo.insurance_rate_percent),
            InputField::InsuranceRate,
        ),
    ];
    for (label, value, field) in rows {
        writeln!(out, "  {label:<16}{value:>14}{}", mark(field))?;
    }

    writeln!(out)?;
    writeln!(out, "Totals")?;
    let totals = [
        ("Amount borrowed", result.total_borrowed),
        ("Down payment", result.down_payment_amount),
        ("Origination fees", result.origination_fees),
    ];
    for (label, amount) in totals {
        writeln!(out, "  {label:<22}{:>14}", format_currency(amount))?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly")?;
    let monthly = [
        ("Principal & interest", result.monthly_principal_and_interest),
        ("PMI", result.monthly_pmi),
        ("Insurance", result.monthly_insurance),
        ("Taxes", result.monthly_taxes),
        ("Total monthly payment", result.total_monthly_payment),
    ];
    for (label, amount) in monthly {
        writeln!(out, "  {label:<22}{:>14}", format_currency(amount))?;
    }

    if !echo.substituted.is_empty() {
        writeln!(out)?;
        writeln!(out, "* replaced with a default value")?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use mortgage_core::{CalculatorSession, RawInputs};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_currency_rounds_to_cents() {
        assert_eq!(format_currency(dec!(1310.384246)), "$1310.38");
        assert_eq!(format_currency(dec!(125)), "$125.00");
    }

    #[test]
    fn format_percent_pads_two_decimals() {
        assert_eq!(format_percent(dec!(0.035)), "3.50%");
        assert_eq!(format_percent(dec!(0.2)), "20.00%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
    }

    #[test]
    fn render_profiles_lists_every_profile() {
        let catalog = LoanProfileCatalog::new();

        let out = render_profiles(&catalog).unwrap();

        assert!(out.contains("[0] USDA Rural Housing Development Loan (USDA)"));
        assert!(out.contains("[1] FHA Guaranteed Loan (FHA)"));
        assert!(out.contains("[2] Traditional Loan (TRADITIONAL)"));
        assert!(out.contains("loan fee 0.80%  |  PMI 1.50%  |  minimum down 3.50%"));
    }

    #[test]
    fn render_pass_shows_totals_and_marks_defaults() {
        let mut session = CalculatorSession::default();
        session.select_profile(1).unwrap();
        let pass = session
            .recalculate(&RawInputs {
                loan_amount: Some("300000".to_string()),
                down_payment: Some("3.5".to_string()),
                interest_rate: Some("3.5".to_string()),
                term_years: Some("30".to_string()),
                annual_taxes: Some("3600".to_string()),
                insurance_rate: None,
            })
            .unwrap();

        let out = render_pass(session.selected_profile(), &pass).unwrap();

        assert!(out.contains("$1310.38"));
        assert!(out.contains("$364.77"));
        assert!(out.contains("$2100.15"));
        assert!(out.contains("0.50% *"));
        assert!(out.contains("* replaced with a default value"));
    }
}
