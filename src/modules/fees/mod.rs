pub mod controllers;
pub mod models;
pub mod services;

pub use models::{FeeCalculation, RemittanceCalculation, RemittanceInput};
pub use services::{FeeCalculator, RemittanceCalculator, DEFAULT_FEE_RATE_HT, DEFAULT_POSTAL_CODE};
