pub mod fee_controller;

pub use fee_controller::{calculate_fees, calculate_remittance, configure_fee_routes};
