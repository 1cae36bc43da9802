// Leases module: signature-driven activation of a lease and its property

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Lease, LeaseStatus, PropertyStatus, StatusTransition};
pub use repositories::{LeaseRepository, PgLeaseRepository};
pub use services::LeaseActivationService;
