//! Compensating saga executor.
//!
//! A saga is an ordered list of steps run one after the other against a shared
//! context (typically a repository handle). When a step fails, every step that
//! already completed is compensated in reverse order. This is best-effort
//! atomicity for backends that do not expose multi-statement transactions to
//! the application; it is not ACID.

mod executor;
mod step;

pub use executor::{Saga, SagaOutcome};
pub use step::{SagaStep, StepFuture};
