//! Concurrent fan-out with partial failure handling
//!
//! Every target gets its own task. The coordinator waits for all of them,
//! writes each result into the slot matching its input position, and never
//! cancels siblings when one fails.

use std::future::Future;

use maxcdn_domain::{Envelope, MaxCdnError, Result};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Type alias for task list to avoid complexity warnings
type TaskList<T, R> = Vec<(T, JoinHandle<Result<R>>)>;

/// Result for one fan-out target
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T, R = Envelope> {
    pub target: T,
    pub result: Result<R>,
}

impl<T, R> Outcome<T, R> {
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-target results of a fan-out, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct FanOutReport<T, R = Envelope> {
    outcomes: Vec<Outcome<T, R>>,
}

impl<T, R> FanOutReport<T, R> {
    pub fn outcomes(&self) -> &[Outcome<T, R>] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<Outcome<T, R>> {
        self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.result.is_err())
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&T, &MaxCdnError)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.result {
            Err(err) => Some((&outcome.target, err)),
            Ok(_) => None,
        })
    }

    pub fn successes(&self) -> impl Iterator<Item = (&T, &R)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.result {
            Ok(value) => Some((&outcome.target, value)),
            Err(_) => None,
        })
    }

    /// Error of the last failed target in input order.
    pub fn last_error(&self) -> Option<&MaxCdnError> {
        self.outcomes.iter().rev().find_map(|outcome| outcome.result.as_ref().err())
    }

    /// All values when every target succeeded.
    ///
    /// # Errors
    /// Returns [`FanOutReport::last_error`] when any target failed.
    pub fn into_result(self) -> Result<Vec<R>> {
        if let Some(err) = self.last_error() {
            return Err(err.clone());
        }
        self.outcomes.into_iter().map(|outcome| outcome.result).collect()
    }
}

impl<T, R> From<Vec<Outcome<T, R>>> for FanOutReport<T, R> {
    fn from(outcomes: Vec<Outcome<T, R>>) -> Self {
        Self { outcomes }
    }
}

/// Run `operation` once per target, all concurrently.
///
/// Returns only after every task has finished. A task that panics is reported
/// as `MaxCdnError::Internal` for its target.
pub async fn fan_out<T, R, F, Fut>(targets: Vec<T>, operation: F) -> FanOutReport<T, R>
where
    T: Clone,
    R: Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R>> + Send + 'static,
{
    if targets.is_empty() {
        return FanOutReport { outcomes: Vec::new() };
    }

    debug!(count = targets.len(), "Dispatching fan-out");

    let tasks: TaskList<T, R> = targets
        .into_iter()
        .map(|target| {
            let task = tokio::spawn(operation(target.clone()));
            (target, task)
        })
        .collect();

    let mut outcomes = Vec::with_capacity(tasks.len());
    for (index, (target, task)) in tasks.into_iter().enumerate() {
        let result = match task.await {
            Ok(result) => result,
            Err(join_err) => {
                Err(MaxCdnError::Internal(format!("fan-out task {index} join error: {join_err}")))
            }
        };
        outcomes.push(Outcome { target, result });
    }

    let report = FanOutReport { outcomes };
    let failed = report.failure_count();
    if failed > 0 {
        warn!(
            succeeded = report.len() - failed,
            failed,
            last_error = ?report.last_error(),
            "Fan-out completed with errors"
        );
    } else {
        info!(succeeded = report.len(), "Fan-out successful");
    }

    report
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn empty_input_yields_empty_report() {
        let report: FanOutReport<u32, u32> = fan_out(Vec::new(), |n: u32| async move { Ok(n) }).await;
        assert!(report.is_empty());
        assert!(!report.has_failures());
        assert_eq!(report.into_result(), Ok(Vec::new()));
    }

    #[tokio::test]
    async fn results_keep_input_order_despite_completion_order() {
        // Later targets finish first
        let report = fan_out(vec![30_u64, 20, 10, 0], |delay| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(delay * 2)
        })
        .await;

        let targets: Vec<u64> = report.outcomes().iter().map(|o| o.target).collect();
        assert_eq!(targets, [30, 20, 10, 0]);
        assert_eq!(report.into_result(), Ok(vec![60, 40, 20, 0]));
    }

    #[tokio::test]
    async fn failures_do_not_cancel_siblings() {
        let completed = Arc::new(AtomicUsize::new(0));
        let counter = completed.clone();

        let report = fan_out(vec![1_u32, 2, 3, 4], move |n| {
            let counter = counter.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(u64::from(n) * 5)).await;
                counter.fetch_add(1, Ordering::SeqCst);
                if n % 2 == 0 {
                    Err(MaxCdnError::api("Bad Request", format!("target {n}")))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(completed.load(Ordering::SeqCst), 4);
        assert_eq!(report.len(), 4);
        assert_eq!(report.failure_count(), 2);
        assert_eq!(report.successes().map(|(t, _)| *t).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(report.failures().map(|(t, _)| *t).collect::<Vec<_>>(), [2, 4]);
        assert_eq!(report.last_error(), Some(&MaxCdnError::api("Bad Request", "target 4")));
        assert_eq!(report.into_result(), Err(MaxCdnError::api("Bad Request", "target 4")));
    }

    #[tokio::test]
    async fn panicking_task_is_reported_not_propagated() {
        let report = fan_out(vec![false, true], |explode| async move {
            assert!(!explode, "boom");
            Ok(())
        })
        .await;

        assert!(report.outcomes()[0].is_ok());
        assert!(matches!(report.outcomes()[1].result, Err(MaxCdnError::Internal(_))));
    }
}
