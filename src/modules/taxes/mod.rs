pub mod controllers;
pub mod models;
pub mod services;

pub use models::Territory;
pub use services::resolve_vat_rate;
