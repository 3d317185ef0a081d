//! The fixed set of loan programs a borrower can choose between.
//!
//! | index | short name  | loan fee | PMI   | min. down | rate estimate |
//! |-------|-------------|----------|-------|-----------|---------------|
//! | 0     | USDA        | 2.0%     | 0.5%  | 0%        | 3.5%          |
//! | 1     | FHA         | 0.8%     | 1.5%  | 3.5%      | 3.5%          |
//! | 2     | TRADITIONAL | 2.0%     | 2.0%  | 20%       | 4.0%          |

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{LoanProfile, LoanType};

/// Errors returned by catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested index does not name a profile.
    #[error("loan profile index {index} is out of range (0..{count})")]
    OutOfRange { index: usize, count: usize },
}

/// Immutable, ordered registry of [`LoanProfile`]s.
///
/// Profiles are stored in [`LoanType::index`] order, so the array position
/// and the enum always agree.
#[derive(Debug, Clone)]
pub struct LoanProfileCatalog {
    profiles: [LoanProfile; 3],
}

impl LoanProfileCatalog {
    /// Builds the catalog with the three standard programs.
    pub fn new() -> Self {
        Self {
            profiles: [usda(), fha(), traditional()],
        }
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Looks up a profile by its position in the catalog.
    ///
    /// # Errors
    /// * [`CatalogError::OutOfRange`] when `index >= profile_count()`.
    ///
    /// # Example
    ///
    /// ```
    /// use mortgage_core::{CatalogError, LoanProfileCatalog};
    ///
    /// let catalog = LoanProfileCatalog::new();
    ///
    /// assert_eq!(catalog.profile(1).unwrap().short_name, "FHA");
    /// assert_eq!(
    ///     catalog.profile(3),
    ///     Err(CatalogError::OutOfRange { index: 3, count: 3 })
    /// );
    /// ```
    pub fn profile(
        &self,
        index: usize,
    ) -> Result<&LoanProfile, CatalogError> {
        self.profiles.get(index).ok_or(CatalogError::OutOfRange {
            index,
            count: self.profile_count(),
        })
    }

    /// Infallible lookup by loan type.
    pub fn get(
        &self,
        loan_type: LoanType,
    ) -> &LoanProfile {
        &self.profiles[loan_type.index()]
    }

    /// Profiles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &LoanProfile> {
        self.profiles.iter()
    }
}

impl Default for LoanProfileCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn usda() -> LoanProfile {
    LoanProfile {
        loan_type: LoanType::Usda,
        name: "USDA Rural Housing Development Loan",
        short_name: LoanType::Usda.as_str(),
        loan_fee_rate: Decimal::new(2, 2),
        standard_pmi_rate: Decimal::new(5, 3),
        minimum_down_payment_rate: Decimal::ZERO,
        fixed_interest_rate_estimate: Decimal::new(35, 3),
        description: "USDA Rural Housing Development Loans are granted to home purchasers who \
            meet specific income requirements and plan to purchase homes in areas specified by \
            the USDA. Most other FHA loan requirements apply as well. A 2% fee is built into the \
            total loan amount (a $100,000 loan will actually be $102,000), and a 0.5% mortgage \
            guarantee fee, the USDA's version of PMI, is charged monthly. There is no minimum \
            down payment for USDA loans, however you should still have money set aside for \
            closing costs and other expenses.",
    }
}

fn fha() -> LoanProfile {
    LoanProfile {
        loan_type: LoanType::Fha,
        name: "FHA Guaranteed Loan",
        short_name: LoanType::Fha.as_str(),
        loan_fee_rate: Decimal::new(8, 3),
        standard_pmi_rate: Decimal::new(15, 3),
        minimum_down_payment_rate: Decimal::new(35, 3),
        fixed_interest_rate_estimate: Decimal::new(35, 3),
        description: "FHA loans are granted through the HUD program and are a great option for \
            first-time home buyers and those who cannot come up with the traditional 20% down \
            payment required for most mortgages. FHA requires a minimum down payment of 3.5% \
            and roughly a 0.8% fee. You must intend to live in the home as a primary residence \
            and meet certain other criteria.",
    }
}

fn traditional() -> LoanProfile {
    LoanProfile {
        loan_type: LoanType::Traditional,
        name: "Traditional Loan",
        short_name: LoanType::Traditional.as_str(),
        loan_fee_rate: Decimal::new(2, 2),
        standard_pmi_rate: Decimal::new(2, 2),
        minimum_down_payment_rate: Decimal::new(2, 1),
        fixed_interest_rate_estimate: Decimal::new(4, 2),
        description: "Traditional loans typically require up to 20% down and will also have PMI \
            issued against the loan. In some cases there is no PMI when putting down more than \
            20% of the loan. These are traditionally more difficult to secure with less than \
            perfect credit.",
    }
}
