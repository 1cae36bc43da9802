pub mod vat_resolver;

pub use vat_resolver::resolve_vat_rate;
