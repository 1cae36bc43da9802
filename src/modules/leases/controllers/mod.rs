pub mod lease_controller;

pub use lease_controller::{activate_lease, configure_lease_routes};
