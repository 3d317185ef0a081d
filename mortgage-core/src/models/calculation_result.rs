use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Monthly payment breakdown produced by one calculation pass.
///
/// Values are kept at full precision; use [`CalculationResult::rounded`]
/// before showing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Principal after the down payment, including origination fees.
    pub total_borrowed: Decimal,
    pub down_payment_amount: Decimal,
    pub origination_fees: Decimal,

    pub monthly_principal_and_interest: Decimal,
    pub monthly_pmi: Decimal,
    pub monthly_insurance: Decimal,
    pub monthly_taxes: Decimal,

    /// Sum of the four monthly components.
    pub total_monthly_payment: Decimal,
}

impl CalculationResult {
    /// Returns a copy with every amount rounded half-up to cents.
    pub fn rounded(&self) -> Self {
        Self {
            total_borrowed: round_half_up(self.total_borrowed),
            down_payment_amount: round_half_up(self.down_payment_amount),
            origination_fees: round_half_up(self.origination_fees),
            monthly_principal_and_interest: round_half_up(self.monthly_principal_and_interest),
            monthly_pmi: round_half_up(self.monthly_pmi),
            monthly_insurance: round_half_up(self.monthly_insurance),
            monthly_taxes: round_half_up(self.monthly_taxes),
            total_monthly_payment: round_half_up(self.total_monthly_payment),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounded_rounds_every_field_to_cents() {
        let result = CalculationResult {
            total_borrowed: dec!(291816),
            down_payment_amount: dec!(10500.000),
            origination_fees: dec!(2316.0000),
            monthly_principal_and_interest: dec!(1310.384246),
            monthly_pmi: dec!(364.770),
            monthly_insurance: dec!(125),
            monthly_taxes: dec!(300),
            total_monthly_payment: dec!(2100.154246),
        };

        let rounded = result.rounded();

        assert_eq!(rounded.monthly_principal_and_interest, dec!(1310.38));
        assert_eq!(rounded.monthly_pmi, dec!(364.77));
        assert_eq!(rounded.total_monthly_payment, dec!(2100.15));
        assert_eq!(rounded.total_borrowed, dec!(291816.00));
    }
}
