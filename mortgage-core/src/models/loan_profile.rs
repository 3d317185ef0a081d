use rust_decimal::Decimal;
use serde::Serialize;

use super::LoanType;

/// Financial parameters for one loan program.
///
/// All rates are fractions (`0.035` is 3.5%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanProfile {
    pub loan_type: LoanType,
    pub name: &'static str,
    pub short_name: &'static str,

    /// Upfront fee charged on the amount borrowed after the down payment.
    pub loan_fee_rate: Decimal,

    /// Annual PMI (or guarantee fee) charged on the fee-inclusive balance.
    pub standard_pmi_rate: Decimal,

    /// Down payment used when the borrower does not supply one.
    pub minimum_down_payment_rate: Decimal,

    /// Annual interest rate used when the borrower does not supply one.
    pub fixed_interest_rate_estimate: Decimal,

    pub description: &'static str,
}
