use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::step::SagaStep;

/// Result of running a [`Saga`].
///
/// `compensated` only says that at least one compensation was attempted. A
/// compensation that itself failed is logged and its step name is listed in
/// `failed_compensations`; it never flips `success` or raises.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SagaOutcome<T> {
    pub success: bool,
    /// Results of the steps that completed, in completion order
    pub results: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_step: Option<String>,
    pub compensated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_compensations: Vec<String>,
}

impl<T> SagaOutcome<T> {
    fn completed(results: Vec<T>) -> Self {
        Self {
            success: true,
            results,
            error: None,
            failed_step: None,
            compensated: false,
            failed_compensations: Vec::new(),
        }
    }
}

/// Ordered sequence of steps sharing a context of type `C` and producing
/// results of type `T`.
pub struct Saga<C, T> {
    name: String,
    steps: Vec<SagaStep<C, T>>,
}

impl<C, T> Saga<C, T>
where
    C: Clone + Send + 'static,
    T: Clone + Send + 'static,
{
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Append a step; steps execute in the order they are added
    pub fn step(mut self, step: SagaStep<C, T>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[SagaStep<C, T>] {
        &self.steps
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// On failure the completed steps are compensated in strict reverse order,
    /// each with the result it produced. A failing compensation does not stop
    /// the remaining ones.
    pub async fn execute(&self, ctx: C) -> SagaOutcome<T> {
        info!(saga = %self.name, steps = self.steps.len(), "Starting saga");

        let mut results = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            debug!(saga = %self.name, step = step.name(), "Executing step");

            match step.run(ctx.clone()).await {
                Ok(result) => results.push(result),
                Err(err) => {
                    let message = err.to_string();
                    error!(
                        saga = %self.name,
                        step = step.name(),
                        error = %message,
                        "Saga step failed, compensating {} completed step(s)",
                        results.len()
                    );

                    let (compensated, failed_compensations) =
                        self.compensate(&ctx, &results).await;

                    return SagaOutcome {
                        success: false,
                        results,
                        error: Some(message),
                        failed_step: Some(step.name().to_string()),
                        compensated,
                        failed_compensations,
                    };
                }
            }
        }

        info!(saga = %self.name, "Saga completed");
        SagaOutcome::completed(results)
    }

    async fn compensate(&self, ctx: &C, results: &[T]) -> (bool, Vec<String>) {
        let mut compensated = false;
        let mut failed = Vec::new();

        for (step, result) in self.steps.iter().zip(results).rev() {
            let Some(undo) = step.undo(ctx.clone(), result.clone()) else {
                debug!(saga = %self.name, step = step.name(), "No compensation declared");
                continue;
            };

            compensated = true;
            match undo.await {
                Ok(()) => {
                    info!(saga = %self.name, step = step.name(), "Step compensated");
                }
                Err(err) => {
                    error!(
                        saga = %self.name,
                        step = step.name(),
                        error = %err,
                        "Compensation failed, state may be partially applied"
                    );
                    failed.push(step.name().to_string());
                }
            }
        }

        if !failed.is_empty() {
            warn!(
                saga = %self.name,
                failed = ?failed,
                "Saga rolled back with failed compensations"
            );
        }

        (compensated, failed)
    }
}

impl<C, T> std::fmt::Debug for Saga<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Saga")
            .field("name", &self.name)
            .field("steps", &self.steps)
            .finish()
    }
}
