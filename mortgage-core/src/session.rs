//! Calculator state for one borrower working through the form.
//!
//! The session owns the selected loan program and the single
//! [`CalculationInputs`] instance. Every pass normalizes the raw field text
//! into those inputs and then recalculates the breakdown from scratch; no
//! other state survives between passes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculations::{CalculationError, calculate};
use crate::normalization::{InputEcho, InputNormalizer, RawInputs};
use crate::{
    CalculationInputs, CalculationResult, CatalogError, InputDefaults, LoanProfile,
    LoanProfileCatalog, LoanType,
};

/// Output of one normalize-then-calculate pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationPass {
    pub loan_type: LoanType,
    pub echo: InputEcho,
    pub result: CalculationResult,
}

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    catalog: LoanProfileCatalog,
    defaults: InputDefaults,
    selected: LoanType,
    inputs: CalculationInputs,
}

impl CalculatorSession {
    /// Starts a session with the first catalog profile selected.
    ///
    /// Defaults outside their field's domain are clamped into it.
    pub fn new(defaults: InputDefaults) -> Self {
        let clamped = defaults.clamped();
        if clamped != defaults {
            warn!(?defaults, ?clamped, "clamped out-of-range input defaults");
        }
        let defaults = clamped;

        let catalog = LoanProfileCatalog::new();
        let selected = LoanType::default();
        let inputs = CalculationInputs::from_defaults(&defaults, catalog.get(selected));

        Self {
            catalog,
            defaults,
            selected,
            inputs,
        }
    }

    pub fn catalog(&self) -> &LoanProfileCatalog {
        &self.catalog
    }

    pub fn selected_profile(&self) -> &LoanProfile {
        self.catalog.get(self.selected)
    }

    pub fn inputs(&self) -> &CalculationInputs {
        &self.inputs
    }

    /// Switches to the profile at `index`.
    ///
    /// The down payment and interest rate are reset to the new profile's
    /// defaults; the other inputs are kept. The returned echo carries the
    /// values to show in the form.
    ///
    /// # Errors
    /// * [`CatalogError::OutOfRange`] when `index` names no profile. The
    ///   session is left unchanged.
    pub fn select_profile(
        &mut self,
        index: usize,
    ) -> Result<InputEcho, CatalogError> {
        let profile = self.catalog.profile(index)?;

        self.selected = profile.loan_type;
        self.inputs.down_payment_rate = profile.minimum_down_payment_rate;
        self.inputs.interest_rate = profile.fixed_interest_rate_estimate;

        info!(loan_type = profile.short_name, "selected loan profile");
        Ok(InputEcho::from_inputs(&self.inputs))
    }

    /// Normalizes `raw` into the session inputs and recalculates.
    ///
    /// # Errors
    ///
    /// [`CalculationError::InvalidInput`] only if normalization let an
    /// invalid value through.
    pub fn recalculate(
        &mut self,
        raw: &RawInputs,
    ) -> Result<CalculationPass, CalculationError> {
        let profile = self.catalog.get(self.selected);
        let echo = InputNormalizer::new(profile, &self.defaults).normalize(&mut self.inputs, raw);
        if !echo.substituted.is_empty() {
            debug!(
                substituted = ?echo.substituted,
                "replaced invalid inputs with defaults"
            );
        }

        let result = calculate(profile, &self.inputs)?;

        Ok(CalculationPass {
            loan_type: self.selected,
            echo,
            result,
        })
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(InputDefaults::default())
    }
}
