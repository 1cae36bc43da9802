pub mod tax_controller;

pub use tax_controller::{configure_tax_routes, get_vat_rate};
