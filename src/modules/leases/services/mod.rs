pub mod lease_activation_service;

pub use lease_activation_service::LeaseActivationService;
