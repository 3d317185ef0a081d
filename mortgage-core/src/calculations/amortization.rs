//! Fixed-rate amortized payment.
//!
//! ```text
//! M = P * i(1 + i)^n / ((1 + i)^n - 1)
//! ```
//!
//! where `P` is the principal, `i` the monthly rate and `n` the number of
//! monthly payments. The implementation evaluates the algebraically equal
//! `P * i / (1 - (1 + i)^-n)` so the intermediate values stay bounded.

use rust_decimal::Decimal;
use tracing::warn;

use super::CalculationError;
use super::common::MONTHS_PER_YEAR;

/// Monthly principal and interest payment for a fixed-rate loan.
///
/// A zero rate returns `principal / n`. When `(1 + i)^n` grows past the
/// decimal range the payment has converged to the interest-only amount
/// `principal * i`, which is returned instead.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if `term_years` is zero or
/// `annual_rate` is negative.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::amortized_payment;
/// use mortgage_core::calculations::common::round_half_up;
///
/// let payment = amortized_payment(dec!(291816), dec!(0.035), 30).unwrap();
///
/// assert_eq!(round_half_up(payment), dec!(1310.38));
/// ```
pub fn amortized_payment(
    principal: Decimal,
    annual_rate: Decimal,
    term_years: u32,
) -> Result<Decimal, CalculationError> {
    if term_years == 0 {
        return Err(CalculationError::InvalidInput {
            field: "term_years",
            reason: "term must be at least one year".to_string(),
        });
    }
    if annual_rate < Decimal::ZERO {
        return Err(CalculationError::InvalidInput {
            field: "interest_rate",
            reason: format!("rate must be non-negative, got {annual_rate}"),
        });
    }

    let payments = u64::from(term_years) * 12;
    let monthly_rate = annual_rate / MONTHS_PER_YEAR;

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(payments));
    }

    match checked_powi(Decimal::ONE + monthly_rate, payments) {
        Some(growth) if growth > Decimal::ONE => {
            let discount = Decimal::ONE / growth;
            Ok(principal * monthly_rate / (Decimal::ONE - discount))
        }
        // (1 + i)^n rounded to exactly one: the rate is below decimal precision.
        Some(_) => Ok(principal / Decimal::from(payments)),
        None => {
            warn!(
                %annual_rate,
                term_years, "compound growth overflowed; using interest-only payment"
            );
            Ok(principal * monthly_rate)
        }
    }
}

/// `base^exp` by repeated squaring, or `None` on overflow.
fn checked_powi(
    base: Decimal,
    exp: u64,
) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut square = base;
    let mut remaining = exp;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(square)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.checked_mul(square)?;
        }
    }

    Some(result)
}
