pub mod fee_calculator;
pub mod remittance_calculator;

pub use fee_calculator::{FeeCalculator, DEFAULT_FEE_RATE_HT, DEFAULT_POSTAL_CODE};
pub use remittance_calculator::RemittanceCalculator;
