pub mod prorata_controller;

pub use prorata_controller::{calculate_charge_regularization, calculate_prorata, configure_prorata_routes};
