use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::clamp_non_negative;
use crate::{CalculationError, CalculationInputs};

/// Fallback values for the inputs that do not come from a loan profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub loan_amount: Decimal,
    pub term_years: u32,
    pub annual_taxes: Decimal,
    pub insurance_rate: Decimal,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            loan_amount: Decimal::from(200_000),
            term_years: 30,
            annual_taxes: Decimal::ZERO,
            insurance_rate: Decimal::new(5, 3),
        }
    }
}

impl InputDefaults {
    /// Checks every value against the domain the calculation accepts.
    ///
    /// # Errors
    /// * [`CalculationError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CalculationError> {
        let invalid = |field: &'static str, reason: String| {
            Err(CalculationError::InvalidInput { field, reason })
        };

        let max_loan_amount = Decimal::from(CalculationInputs::MAX_LOAN_AMOUNT);
        if self.loan_amount.is_sign_negative() || self.loan_amount > max_loan_amount {
            return invalid(
                "loan_amount",
                format!(
                    "must be between 0 and {max_loan_amount}, got {}",
                    self.loan_amount
                ),
            );
        }
        if self.term_years == 0 {
            return invalid("term_years", "must be at least one year".to_string());
        }
        if self.annual_taxes.is_sign_negative() {
            return invalid(
                "annual_taxes",
                format!("must be non-negative, got {}", self.annual_taxes),
            );
        }
        if self.insurance_rate.is_sign_negative()
            || self.insurance_rate > CalculationInputs::MAX_RATE
        {
            return invalid(
                "insurance_rate",
                format!("must be between 0 and 1, got {}", self.insurance_rate),
            );
        }

        Ok(())
    }

    /// Copy with every value pulled into its field's domain.
    pub fn clamped(&self) -> Self {
        let max_loan_amount = Decimal::from(CalculationInputs::MAX_LOAN_AMOUNT);
        Self {
            loan_amount: clamp_non_negative(self.loan_amount).min(max_loan_amount),
            term_years: self.term_years.max(1),
            annual_taxes: clamp_non_negative(self.annual_taxes),
            insurance_rate: clamp_non_negative(self.insurance_rate)
                .min(CalculationInputs::MAX_RATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_values_are_valid() {
        assert_eq!(InputDefaults::default().validate(), Ok(()));
        assert_eq!(InputDefaults::default().clamped(), InputDefaults::default());
    }

    #[test]
    fn validate_rejects_zero_term() {
        let defaults = InputDefaults {
            term_years: 0,
            ..InputDefaults::default()
        };

        assert!(matches!(
            defaults.validate(),
            Err(CalculationError::InvalidInput {
                field: "term_years",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_out_of_domain_amounts_and_rates() {
        let cases = [
            (
                InputDefaults {
                    loan_amount: dec!(-1),
                    ..InputDefaults::default()
                },
                "loan_amount",
            ),
            (
                InputDefaults {
                    annual_taxes: dec!(-100),
                    ..InputDefaults::default()
                },
                "annual_taxes",
            ),
            (
                InputDefaults {
                    insurance_rate: dec!(5),
                    ..InputDefaults::default()
                },
                "insurance_rate",
            ),
        ];

        for (defaults, expected) in cases {
            match defaults.validate() {
                Err(CalculationError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let defaults = InputDefaults {
            loan_amount: dec!(-5000),
            term_years: 0,
            annual_taxes: dec!(-1),
            insurance_rate: dec!(5),
        };

        let clamped = defaults.clamped();

        assert_eq!(
            clamped,
            InputDefaults {
                loan_amount: dec!(0),
                term_years: 1,
                annual_taxes: dec!(0),
                insurance_rate: dec!(1),
            }
        );
        assert_eq!(clamped.validate(), Ok(()));
    }
}
