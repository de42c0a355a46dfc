use super::coordinator::CompletionTracker;
use super::sink::ReportSink;
use crate::use_cases::ResolveEntryUseCase;
use batchdns_domain::{Entry, Report};
use std::sync::Arc;
use tracing::{debug, warn};

/// One member of the resolver pool.
///
/// Pulls raw lines off the shared queue until the queue is closed and
/// drained, which is the worker's only termination signal. Every dequeued
/// line is decremented from the tracker exactly once, whether it resolved,
/// failed, or never parsed.
pub struct ResolverWorker {
    id: usize,
    queue: flume::Receiver<String>,
    resolve: ResolveEntryUseCase,
    sink: Arc<ReportSink>,
    tracker: Arc<CompletionTracker>,
}

impl ResolverWorker {
    pub fn new(
        id: usize,
        queue: flume::Receiver<String>,
        resolve: ResolveEntryUseCase,
        sink: Arc<ReportSink>,
        tracker: Arc<CompletionTracker>,
    ) -> Self {
        Self {
            id,
            queue,
            resolve,
            sink,
            tracker,
        }
    }

    pub async fn run(self) {
        while let Ok(line) = self.queue.recv_async().await {
            let report = self.process(line).await;
            self.sink.write_report(&report).await;
            self.tracker.done();
        }
        debug!(worker = self.id, "queue closed and drained, worker exiting");
    }

    async fn process(&self, line: String) -> Report {
        match Entry::parse(&line) {
            Ok(entry) => {
                let outcome = self.resolve.execute(&entry).await;
                Report {
                    query: entry.query_name,
                    record_type: entry.record_type,
                    outcome,
                }
            }
            Err(err) => {
                // Tab-less line: reported as its own Error block so every
                // enqueued line still yields exactly one block.
                warn!(worker = self.id, %line, "malformed input line");
                Report {
                    query: line,
                    record_type: String::new(),
                    outcome: Err(err),
                }
            }
        }
    }
}
