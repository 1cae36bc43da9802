pub mod charge_regularization;
pub mod prorata_calculator;

pub use charge_regularization::ChargeRegularizationCalculator;
pub use prorata_calculator::ProrataCalculator;
