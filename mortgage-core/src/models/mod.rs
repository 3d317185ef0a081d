mod calculation_inputs;
mod calculation_result;
mod input_defaults;
mod loan_profile;
mod loan_type;

pub use calculation_inputs::CalculationInputs;
pub use calculation_result::CalculationResult;
pub use input_defaults::InputDefaults;
pub use loan_profile::LoanProfile;
pub use loan_type::LoanType;
