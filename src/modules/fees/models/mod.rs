mod fee_calculation;
mod remittance;

pub use fee_calculation::{FeeCalculation, FeeRequest};
pub use remittance::{RemittanceCalculation, RemittanceInput, RemittanceRequest};
