pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ChargeRegularization, ProrataResult};
pub use services::{ChargeRegularizationCalculator, ProrataCalculator};
