//! The producer/worker pipeline: one line source feeding an unbounded work
//! queue, a fixed pool of resolver workers draining it, and a completion
//! tracker that defines when a run is over.
pub mod coordinator;
pub mod sink;
pub mod source;
pub mod worker;

pub use coordinator::CompletionTracker;
pub use sink::ReportSink;
pub use worker::ResolverWorker;

use crate::ports::RecordLookup;
use crate::use_cases::ResolveEntryUseCase;
use batchdns_domain::DomainError;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, warn};

pub struct Pipeline {
    lookup: Arc<dyn RecordLookup>,
    workers: usize,
}

impl Pipeline {
    /// A pool needs at least one worker; zero is clamped up.
    pub fn new(lookup: Arc<dyn RecordLookup>, workers: usize) -> Self {
        Self {
            lookup,
            workers: workers.max(1),
        }
    }

    /// Run the whole pipeline to completion and return the number of
    /// entries processed.
    ///
    /// Returns only after every enqueued line has produced its report
    /// block and every worker has observed the closed queue and exited.
    pub async fn run<R>(
        &self,
        input: R,
        output: Box<dyn AsyncWrite + Send + Unpin>,
    ) -> Result<u64, DomainError>
    where
        R: AsyncBufRead + Unpin,
    {
        let (queue_tx, queue_rx) = flume::unbounded::<String>();
        let tracker = Arc::new(CompletionTracker::new());
        let sink = Arc::new(ReportSink::new(output));
        let resolve = ResolveEntryUseCase::new(Arc::clone(&self.lookup));

        // The line source's own hold, released once the input is consumed.
        tracker.add(1);

        debug!(workers = self.workers, "starting resolver pool");
        let mut handles = Vec::with_capacity(self.workers);
        for id in 0..self.workers {
            let worker = ResolverWorker::new(
                id,
                queue_rx.clone(),
                resolve.clone(),
                Arc::clone(&sink),
                Arc::clone(&tracker),
            );
            handles.push(tokio::spawn(worker.run()));
        }
        drop(queue_rx);

        let read = source::read_entries(input, &queue_tx, &tracker).await;

        // Close the queue so workers exit once it is drained, then release
        // the reader hold taken above.
        drop(queue_tx);
        tracker.done();

        tracker.wait().await;
        for handle in handles {
            if let Err(err) = handle.await {
                warn!(%err, "worker task failed to join");
            }
        }

        read
    }
}
