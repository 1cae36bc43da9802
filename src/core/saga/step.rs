use std::future::Future;

use futures_util::future::{BoxFuture, FutureExt};

/// Future returned by a step's execute or compensate closure
pub type StepFuture<T> = BoxFuture<'static, anyhow::Result<T>>;

type ExecuteFn<C, T> = Box<dyn Fn(C) -> StepFuture<T> + Send + Sync>;
type CompensateFn<C, T> = Box<dyn Fn(C, T) -> StepFuture<()> + Send + Sync>;

/// One named unit of work inside a [`Saga`](super::Saga).
///
/// The context is passed by value on every call, so `C` is expected to be a
/// cheap handle such as an `Arc<dyn Repository>` or a connection pool.
pub struct SagaStep<C, T> {
    name: String,
    execute: ExecuteFn<C, T>,
    compensate: Option<CompensateFn<C, T>>,
}

impl<C, T> SagaStep<C, T>
where
    C: Send + 'static,
    T: Send + 'static,
{
    /// Create a step without compensation
    pub fn new<F, Fut>(name: impl Into<String>, execute: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        Self {
            name: name.into(),
            execute: Box::new(move |ctx| execute(ctx).boxed()),
            compensate: None,
        }
    }

    /// Attach a compensation that undoes this step given the result it produced
    pub fn with_compensation<F, Fut>(mut self, compensate: F) -> Self
    where
        F: Fn(C, T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.compensate = Some(Box::new(move |ctx, result| {
            compensate(ctx, result).boxed()
        }));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_compensation(&self) -> bool {
        self.compensate.is_some()
    }

    pub(super) fn run(&self, ctx: C) -> StepFuture<T> {
        (self.execute)(ctx)
    }

    /// Returns `None` when the step declares no compensation
    pub(super) fn undo(&self, ctx: C, result: T) -> Option<StepFuture<()>> {
        self.compensate
            .as_ref()
            .map(|compensate| compensate(ctx, result))
    }
}

impl<C, T> std::fmt::Debug for SagaStep<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SagaStep")
            .field("name", &self.name)
            .field("compensable", &self.compensate.is_some())
            .finish()
    }
}
