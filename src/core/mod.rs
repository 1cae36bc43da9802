pub mod error;
pub mod money;
pub mod saga;

pub use error::{AppError, Result};
pub use saga::{Saga, SagaOutcome, SagaStep};
