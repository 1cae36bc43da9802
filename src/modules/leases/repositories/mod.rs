pub mod lease_repository;

pub use lease_repository::{LeaseRepository, PgLeaseRepository};
