//! Monthly payment breakdown for a selected loan program.
//!
//! # Pipeline
//!
//! Each step consumes the outputs of the steps before it:
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Down payment = loan amount × down payment rate |
//! | 2    | Net principal = loan amount − down payment |
//! | 3    | Origination fees = loan fee rate × net principal |
//! | 4    | Total borrowed = net principal + origination fees |
//! | 5    | Principal & interest = amortized payment on total borrowed |
//! | 6    | PMI = PMI rate × total borrowed / 12 |
//! | 7    | Annual insurance = insurance rate × loan amount |
//! | 8    | Monthly insurance = annual insurance / 12 |
//! | 9    | Monthly taxes = annual taxes / 12 |
//! | 10   | Total = P&I + PMI + taxes + insurance |
//!
//! Fees and PMI are charged on the fee-inclusive balance; insurance is charged
//! on the original loan amount.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::PaymentBreakdown;
//! use mortgage_core::{CalculationInputs, LoanProfileCatalog, LoanType};
//!
//! let catalog = LoanProfileCatalog::new();
//! let inputs = CalculationInputs {
//!     loan_amount: dec!(300000),
//!     down_payment_rate: dec!(0.035),
//!     interest_rate: dec!(0.035),
//!     term_years: 30,
//!     annual_taxes: dec!(3600),
//!     insurance_rate: dec!(0.005),
//! };
//!
//! let breakdown = PaymentBreakdown::new(catalog.get(LoanType::Fha));
//! let result = breakdown.calculate(&inputs).unwrap().rounded();
//!
//! assert_eq!(result.total_borrowed, dec!(291816.00));
//! assert_eq!(result.monthly_principal_and_interest, dec!(1310.38));
//! assert_eq!(result.total_monthly_payment, dec!(2100.15));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use super::CalculationError;
use super::amortization::amortized_payment;
use super::common::MONTHS_PER_YEAR;
use crate::{CalculationInputs, CalculationResult, LoanProfile};

/// Calculates the breakdown for `inputs` under `profile`.
///
/// Shorthand for `PaymentBreakdown::new(profile).calculate(inputs)`.
pub fn calculate(
    profile: &LoanProfile,
    inputs: &CalculationInputs,
) -> Result<CalculationResult, CalculationError> {
    PaymentBreakdown::new(profile).calculate(inputs)
}

/// Calculator bound to one loan profile.
#[derive(Debug, Clone)]
pub struct PaymentBreakdown<'a> {
    profile: &'a LoanProfile,
}

impl<'a> PaymentBreakdown<'a> {
    pub fn new(profile: &'a LoanProfile) -> Self {
        Self { profile }
    }

    /// Runs the full pipeline and returns a fresh result.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidInput`] naming the first field that
    /// is outside its domain:
    /// - `loan_amount` negative or above [`CalculationInputs::MAX_LOAN_AMOUNT`]
    /// - `down_payment_rate`, `interest_rate` or `insurance_rate` outside `[0, 1]`
    /// - `annual_taxes` negative
    /// - `term_years` zero
    pub fn calculate(
        &self,
        inputs: &CalculationInputs,
    ) -> Result<CalculationResult, CalculationError> {
        validate(inputs)?;

        let down_payment_amount = self.down_payment(inputs.loan_amount, inputs.down_payment_rate);
        let net_principal = inputs.loan_amount - down_payment_amount;
        let origination_fees = self.origination_fees(net_principal);
        let total_borrowed = net_principal + origination_fees;

        let monthly_principal_and_interest =
            amortized_payment(total_borrowed, inputs.interest_rate, inputs.term_years)?;
        let monthly_pmi = self.monthly_pmi(total_borrowed);
        let monthly_insurance = self.monthly_insurance(inputs.loan_amount, inputs.insurance_rate);
        let monthly_taxes = inputs.annual_taxes / MONTHS_PER_YEAR;

        let total_monthly_payment =
            monthly_principal_and_interest + monthly_pmi + monthly_taxes + monthly_insurance;

        debug!(
            loan_type = self.profile.short_name,
            %total_borrowed,
            %total_monthly_payment,
            "calculated payment breakdown"
        );

        Ok(CalculationResult {
            total_borrowed,
            down_payment_amount,
            origination_fees,
            monthly_principal_and_interest,
            monthly_pmi,
            monthly_insurance,
            monthly_taxes,
            total_monthly_payment,
        })
    }

    fn down_payment(
        &self,
        loan_amount: Decimal,
        down_payment_rate: Decimal,
    ) -> Decimal {
        loan_amount * down_payment_rate
    }

    /// Upfront fee on the principal remaining after the down payment.
    fn origination_fees(
        &self,
        net_principal: Decimal,
    ) -> Decimal {
        self.profile.loan_fee_rate * net_principal
    }

    /// PMI is charged on the fee-inclusive balance.
    fn monthly_pmi(
        &self,
        total_borrowed: Decimal,
    ) -> Decimal {
        self.profile.standard_pmi_rate * total_borrowed / MONTHS_PER_YEAR
    }

    /// Insurance is charged on the original loan amount, not the balance.
    fn monthly_insurance(
        &self,
        loan_amount: Decimal,
        insurance_rate: Decimal,
    ) -> Decimal {
        insurance_rate * loan_amount / MONTHS_PER_YEAR
    }
}

fn validate(inputs: &CalculationInputs) -> Result<(), CalculationError> {
    let invalid = |field: &'static str, reason: String| {
        Err(CalculationError::InvalidInput { field, reason })
    };

    let max_loan_amount = Decimal::from(CalculationInputs::MAX_LOAN_AMOUNT);
    if inputs.loan_amount < Decimal::ZERO || inputs.loan_amount > max_loan_amount {
        return invalid(
            "loan_amount",
            format!(
                "must be between 0 and {max_loan_amount}, got {}",
                inputs.loan_amount
            ),
        );
    }
    if inputs.down_payment_rate < Decimal::ZERO || inputs.down_payment_rate > Decimal::ONE {
        return invalid(
            "down_payment_rate",
            format!("must be between 0 and 1, got {}", inputs.down_payment_rate),
        );
    }
    if inputs.interest_rate < Decimal::ZERO || inputs.interest_rate > CalculationInputs::MAX_RATE {
        return invalid(
            "interest_rate",
            format!("must be between 0 and 1, got {}", inputs.interest_rate),
        );
    }
    if inputs.term_years == 0 {
        return invalid("term_years", "must be at least one year".to_string());
    }
    if inputs.annual_taxes < Decimal::ZERO {
        return invalid(
            "annual_taxes",
            format!("must be non-negative, got {}", inputs.annual_taxes),
        );
    }
    if inputs.insurance_rate < Decimal::ZERO || inputs.insurance_rate > CalculationInputs::MAX_RATE {
        return invalid(
            "insurance_rate",
            format!("must be between 0 and 1, got {}", inputs.insurance_rate),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::{LoanProfileCatalog, LoanType};

    fn fha_inputs() -> CalculationInputs {
        CalculationInputs {
            loan_amount: dec!(300000),
            down_payment_rate: dec!(0.035),
            interest_rate: dec!(0.035),
            term_years: 30,
            annual_taxes: dec!(3600),
            insurance_rate: dec!(0.005),
        }
    }

    fn default_inputs(profile: &LoanProfile) -> CalculationInputs {
        CalculationInputs {
            loan_amount: dec!(200000),
            down_payment_rate: dec!(0),
            interest_rate: profile.fixed_interest_rate_estimate,
            term_years: 30,
            annual_taxes: dec!(0),
            insurance_rate: dec!(0.005),
        }
    }

    // =========================================================================
    // step tests
    // =========================================================================

    #[test]
    fn origination_fees_apply_fee_rate_to_net_principal() {
        let catalog = LoanProfileCatalog::new();
        let breakdown = PaymentBreakdown::new(catalog.get(LoanType::Fha));

        let result = breakdown.origination_fees(dec!(289500));

        assert_eq!(result, dec!(2316));
    }

    #[test]
    fn monthly_pmi_uses_fee_inclusive_balance() {
        let catalog = LoanProfileCatalog::new();
        let breakdown = PaymentBreakdown::new(catalog.get(LoanType::Fha));

        let result = breakdown.monthly_pmi(dec!(291816));

        assert_eq!(result, dec!(364.77));
    }

    #[test]
    fn monthly_insurance_uses_original_loan_amount() {
        let catalog = LoanProfileCatalog::new();
        let breakdown = PaymentBreakdown::new(catalog.get(LoanType::Fha));

        let result = breakdown.monthly_insurance(dec!(300000), dec!(0.005));

        assert_eq!(result, dec!(125));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_fha_scenario() {
        let catalog = LoanProfileCatalog::new();
        let breakdown = PaymentBreakdown::new(catalog.get(LoanType::Fha));

        let result = breakdown.calculate(&fha_inputs()).unwrap();

        assert_eq!(result.down_payment_amount, dec!(10500));
        assert_eq!(result.origination_fees, dec!(2316));
        assert_eq!(result.total_borrowed, dec!(291816));
        assert_eq!(round_half_up(result.monthly_principal_and_interest), dec!(1310.38));
        assert_eq!(result.monthly_pmi, dec!(364.77));
        assert_eq!(result.monthly_insurance, dec!(125));
        assert_eq!(result.monthly_taxes, dec!(300));
        assert_eq!(round_half_up(result.total_monthly_payment), dec!(2100.15));
    }

    #[test]
    fn calculate_total_is_sum_of_components() {
        let catalog = LoanProfileCatalog::new();
        let breakdown = PaymentBreakdown::new(catalog.get(LoanType::Traditional));

        let result = breakdown.calculate(&fha_inputs()).unwrap();

        assert_eq!(
            result.total_monthly_payment,
            result.monthly_principal_and_interest
                + result.monthly_pmi
                + result.monthly_taxes
                + result.monthly_insurance
        );
    }

    #[test]
    fn calculate_without_down_payment_borrows_loan_plus_fee() {
        let catalog = LoanProfileCatalog::new();

        for profile in catalog.iter() {
            let result = calculate(profile, &default_inputs(profile)).unwrap();

            assert_eq!(
                result.total_borrowed,
                dec!(200000) * (Decimal::ONE + profile.loan_fee_rate),
                "{}",
                profile.short_name
            );
            assert_eq!(result.down_payment_amount, dec!(0));
        }
    }

    #[test]
    fn calculate_usda_defaults() {
        let catalog = LoanProfileCatalog::new();
        let profile = catalog.get(LoanType::Usda);

        let result = calculate(profile, &default_inputs(profile)).unwrap().rounded();

        assert_eq!(result.total_borrowed, dec!(204000.00));
        assert_eq!(result.origination_fees, dec!(4000.00));
        assert_eq!(result.monthly_principal_and_interest, dec!(916.05));
        assert_eq!(result.monthly_pmi, dec!(85.00));
        assert_eq!(result.monthly_insurance, dec!(83.33));
        assert_eq!(result.monthly_taxes, dec!(0.00));
        assert_eq!(result.total_monthly_payment, dec!(1084.38));
    }

    #[test]
    fn calculate_zero_rate_is_straight_line() {
        let catalog = LoanProfileCatalog::new();
        let mut inputs = fha_inputs();
        inputs.interest_rate = dec!(0);

        let result = calculate(catalog.get(LoanType::Fha), &inputs).unwrap();

        assert_eq!(
            result.monthly_principal_and_interest,
            dec!(291816) / dec!(360)
        );
    }

    #[test]
    fn changing_profile_changes_fees_and_pmi_only() {
        let catalog = LoanProfileCatalog::new();
        let inputs = fha_inputs();

        let fha = calculate(catalog.get(LoanType::Fha), &inputs).unwrap();
        let usda = calculate(catalog.get(LoanType::Usda), &inputs).unwrap();

        assert!(fha.origination_fees != usda.origination_fees);
        assert!(fha.monthly_pmi != usda.monthly_pmi);
        assert_eq!(fha.monthly_taxes, usda.monthly_taxes);
        assert_eq!(fha.monthly_insurance, usda.monthly_insurance);
        assert_eq!(fha.down_payment_amount, usda.down_payment_amount);
    }

    #[test]
    fn calculate_full_down_payment_leaves_nothing_to_borrow() {
        let catalog = LoanProfileCatalog::new();
        let mut inputs = fha_inputs();
        inputs.down_payment_rate = dec!(1);

        let result = calculate(catalog.get(LoanType::Fha), &inputs).unwrap();

        assert_eq!(result.total_borrowed, dec!(0));
        assert_eq!(result.monthly_principal_and_interest, dec!(0));
        assert_eq!(result.monthly_pmi, dec!(0));
        assert_eq!(result.total_monthly_payment, dec!(425));
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn calculate_rejects_zero_term() {
        let catalog = LoanProfileCatalog::new();
        let mut inputs = fha_inputs();
        inputs.term_years = 0;

        let result = calculate(catalog.get(LoanType::Fha), &inputs);

        assert_eq!(
            result,
            Err(CalculationError::InvalidInput {
                field: "term_years",
                reason: "must be at least one year".to_string(),
            })
        );
    }

    #[test]
    fn calculate_rejects_down_payment_above_one() {
        let catalog = LoanProfileCatalog::new();
        let mut inputs = fha_inputs();
        inputs.down_payment_rate = dec!(1.5);

        let result = calculate(catalog.get(LoanType::Fha), &inputs);

        assert!(matches!(
            result,
            Err(CalculationError::InvalidInput {
                field: "down_payment_rate",
                ..
            })
        ));
    }

    #[test]
    fn calculate_rejects_negative_loan_amount() {
        let catalog = LoanProfileCatalog::new();
        let mut inputs = fha_inputs();
        inputs.loan_amount = dec!(-1);

        let result = calculate(catalog.get(LoanType::Fha), &inputs);

        assert!(matches!(
            result,
            Err(CalculationError::InvalidInput {
                field: "loan_amount",
                ..
            })
        ));
    }

    #[test]
    fn calculate_rejects_negative_taxes() {
        let catalog = LoanProfileCatalog::new();
        let mut inputs = fha_inputs();
        inputs.annual_taxes = dec!(-100);

        let result = calculate(catalog.get(LoanType::Fha), &inputs);

        assert!(matches!(
            result,
            Err(CalculationError::InvalidInput {
                field: "annual_taxes",
                ..
            })
        ));
    }
}
