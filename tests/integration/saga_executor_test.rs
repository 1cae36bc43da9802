// Compensating saga executor
//
// Steps run in order; the first failure stops the saga and completed steps
// are compensated in reverse with their own results. A failing compensation
// is logged and does not prevent earlier ones from running.

use std::sync::{Arc, Mutex};

use gerance::core::saga::{Saga, SagaStep};

#[derive(Clone, Default)]
struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
    compensations: Arc<Mutex<Vec<(String, u32)>>>,
}

impl Journal {
    fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    fn compensations(&self) -> Vec<(String, u32)> {
        self.compensations.lock().unwrap().clone()
    }
}

fn succeeding(name: &'static str, value: u32) -> SagaStep<Journal, u32> {
    SagaStep::new(name, move |journal: Journal| async move {
        journal.record(format!("execute {}", name));
        Ok(value)
    })
}

fn compensable(name: &'static str, value: u32) -> SagaStep<Journal, u32> {
    succeeding(name, value).with_compensation(move |journal: Journal, result: u32| async move {
        journal.record(format!("compensate {}", name));
        journal
            .compensations
            .lock()
            .unwrap()
            .push((name.to_string(), result));
        Ok(())
    })
}

fn failing(name: &'static str) -> SagaStep<Journal, u32> {
    SagaStep::new(name, move |journal: Journal| async move {
        journal.record(format!("execute {}", name));
        anyhow::bail!("{} rejected by database", name)
    })
}

#[tokio::test]
async fn test_all_steps_succeed() {
    let journal = Journal::default();
    let saga = Saga::new("three_steps")
        .step(compensable("a", 1))
        .step(succeeding("b", 2))
        .step(compensable("c", 3));

    let outcome = saga.execute(journal.clone()).await;

    assert!(outcome.success);
    assert!(!outcome.compensated);
    assert_eq!(outcome.results, vec![1, 2, 3]);
    assert!(outcome.error.is_none());
    assert!(outcome.failed_step.is_none());
    assert!(journal.compensations().is_empty());
}

#[tokio::test]
async fn test_second_step_failure_compensates_first_once() {
    let journal = Journal::default();
    let saga = Saga::new("a_then_b")
        .step(compensable("A", 41))
        .step(failing("B"));

    let outcome = saga.execute(journal.clone()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.failed_step.as_deref(), Some("B"));
    assert_eq!(outcome.error.as_deref(), Some("B rejected by database"));
    assert!(outcome.compensated);
    assert_eq!(outcome.results, vec![41]);
    assert_eq!(journal.compensations(), vec![("A".to_string(), 41)]);
}

#[tokio::test]
async fn test_steps_after_failure_never_run() {
    let journal = Journal::default();
    let saga = Saga::new("halts")
        .step(compensable("a", 1))
        .step(failing("b"))
        .step(compensable("c", 3));

    saga.execute(journal.clone()).await;

    assert!(!journal.entries().contains(&"execute c".to_string()));
}

#[tokio::test]
async fn test_compensation_runs_in_reverse_order() {
    let journal = Journal::default();
    let saga = Saga::new("reverse")
        .step(compensable("first", 1))
        .step(compensable("second", 2))
        .step(compensable("third", 3))
        .step(failing("fourth"));

    saga.execute(journal.clone()).await;

    assert_eq!(
        journal.entries(),
        vec![
            "execute first",
            "execute second",
            "execute third",
            "execute fourth",
            "compensate third",
            "compensate second",
            "compensate first",
        ]
    );
}

#[tokio::test]
async fn test_steps_without_compensation_are_skipped() {
    let journal = Journal::default();
    let saga = Saga::new("partial")
        .step(compensable("a", 1))
        .step(succeeding("b", 2))
        .step(failing("c"));

    let outcome = saga.execute(journal.clone()).await;

    assert!(outcome.compensated);
    assert_eq!(journal.compensations(), vec![("a".to_string(), 1)]);
}

#[tokio::test]
async fn test_no_compensable_steps_reports_not_compensated() {
    let journal = Journal::default();
    let saga = Saga::new("nothing_to_undo")
        .step(succeeding("a", 1))
        .step(failing("b"));

    let outcome = saga.execute(journal.clone()).await;

    assert!(!outcome.success);
    assert!(!outcome.compensated);
}

#[tokio::test]
async fn test_first_step_failure_compensates_nothing() {
    let journal = Journal::default();
    let saga = Saga::new("fails_immediately")
        .step(failing("a"))
        .step(compensable("b", 2));

    let outcome = saga.execute(journal.clone()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.failed_step.as_deref(), Some("a"));
    assert!(outcome.results.is_empty());
    assert!(!outcome.compensated);
}

#[tokio::test]
async fn test_failed_compensation_does_not_stop_earlier_ones() {
    let journal = Journal::default();
    let broken_undo = succeeding("b", 2).with_compensation(|journal: Journal, _result: u32| async move {
        journal.record("compensate b");
        anyhow::bail!("b could not be undone")
    });

    let saga = Saga::new("broken_undo")
        .step(compensable("a", 1))
        .step(broken_undo)
        .step(failing("c"));

    let outcome = saga.execute(journal.clone()).await;

    assert!(!outcome.success);
    assert!(outcome.compensated);
    assert_eq!(outcome.failed_compensations, vec!["b".to_string()]);
    assert_eq!(journal.compensations(), vec![("a".to_string(), 1)]);
    assert_eq!(
        journal.entries(),
        vec!["execute a", "execute b", "execute c", "compensate b", "compensate a"]
    );
}
