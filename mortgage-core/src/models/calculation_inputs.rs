use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{InputDefaults, LoanProfile};

/// The user-editable values a calculation runs on.
///
/// Amounts are whole currency units; rates are fractions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Purchase price before the down payment.
    pub loan_amount: Decimal,

    /// Fraction of the loan amount paid up front, within `[0, 1]`.
    pub down_payment_rate: Decimal,

    /// Annual interest rate.
    pub interest_rate: Decimal,

    /// Loan term in years, at least 1.
    pub term_years: u32,

    /// Property taxes per year.
    pub annual_taxes: Decimal,

    /// Annual homeowner's insurance as a fraction of the loan amount.
    pub insurance_rate: Decimal,
}

impl CalculationInputs {
    /// Largest loan amount the engine accepts, in whole currency units.
    pub const MAX_LOAN_AMOUNT: u64 = 1_000_000_000_000_000;

    /// Largest accepted rate for any rate field (100%).
    pub const MAX_RATE: Decimal = Decimal::ONE;

    /// Builds the inputs a fresh session starts with for `profile`.
    pub fn from_defaults(
        defaults: &InputDefaults,
        profile: &LoanProfile,
    ) -> Self {
        Self {
            loan_amount: defaults.loan_amount,
            down_payment_rate: profile.minimum_down_payment_rate,
            interest_rate: profile.fixed_interest_rate_estimate,
            term_years: defaults.term_years,
            annual_taxes: defaults.annual_taxes,
            insurance_rate: defaults.insurance_rate,
        }
    }
}
