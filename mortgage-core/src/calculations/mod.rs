//! Mortgage payment calculations.
//!
//! This module provides the amortization formula and the payment breakdown
//! pipeline that turns a loan profile plus normalized inputs into a
//! [`CalculationResult`](crate::CalculationResult).

use thiserror::Error;

pub mod amortization;
pub mod breakdown;
pub mod common;

pub use amortization::amortized_payment;
pub use breakdown::{PaymentBreakdown, calculate};

/// Errors that can occur during a calculation.
///
/// Inputs reaching the engine are expected to be normalized already, so
/// these indicate a bug in the caller rather than bad user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// A field violated its contract.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}
