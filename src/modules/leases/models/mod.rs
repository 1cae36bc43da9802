mod lease;

pub use lease::{Lease, LeaseRow, LeaseStatus, PropertyStatus, StatusTransition};
