pub mod calculations;
pub mod catalog;
pub mod models;
pub mod normalization;
pub mod session;

pub use calculations::CalculationError;
pub use catalog::{CatalogError, LoanProfileCatalog};
pub use models::*;
pub use normalization::{InputEcho, InputField, RawInputs};
pub use session::{CalculationPass, CalculatorSession};
