use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Wait-group style completion tracker.
///
/// The pipeline holds one unit on behalf of the line source for the whole
/// read phase and one unit per enqueued line; each worker releases one unit
/// per fully processed line. `wait` completes only once every unit has been
/// released, which is the sole shutdown condition for the whole run.
#[derive(Debug, Default)]
pub struct CompletionTracker {
    outstanding: AtomicUsize,
    drained: Notify,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take `n` units of outstanding work.
    pub fn add(&self, n: usize) {
        self.outstanding.fetch_add(n, Ordering::SeqCst);
    }

    /// Release one unit. Must be paired with a prior `add`.
    pub fn done(&self) {
        let previous = self.outstanding.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "done() without a matching add()");
        if previous == 1 {
            self.drained.notify_waiters();
        }
    }

    /// Current number of outstanding units.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }

    /// Wait until every unit taken so far has been released.
    pub async fn wait(&self) {
        loop {
            // Register interest before checking, so a release that lands
            // between the check and the await still wakes us.
            let notified = self.drained.notified();
            if self.outstanding.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}
