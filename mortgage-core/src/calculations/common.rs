//! Common helpers shared by the mortgage calculations.
//!
//! This module provides rounding for display and the conversions between
//! the percentages borrowers type and the fractions the engine works with.

use rust_decimal::Decimal;

/// Number of payments in a year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1310.384)), dec!(1310.38));
/// assert_eq!(round_half_up(dec!(1310.385)), dec!(1310.39));
/// assert_eq!(round_half_up(dec!(-1310.385)), dec!(-1310.39)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a percentage (`3.5`) into a fraction (`0.035`).
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / ONE_HUNDRED
}

/// Converts a fraction (`0.035`) into a percentage (`3.5`).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::fraction_to_percent;
///
/// assert_eq!(fraction_to_percent(dec!(0.035)), dec!(3.5));
/// ```
pub fn fraction_to_percent(fraction: Decimal) -> Decimal {
    (fraction * ONE_HUNDRED).normalize()
}

/// Replaces a negative value, including a signed zero, with zero.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}
