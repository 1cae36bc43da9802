//! Gérance rental accounting library
//!
//! Fee, remittance and prorata calculations for managed rental properties,
//! plus the compensating saga used to activate signed leases.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::fees;
pub use modules::leases;
pub use modules::prorata;
pub use modules::taxes;
