use super::coordinator::CompletionTracker;
use batchdns_domain::DomainError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Feed every non-blank line of `input` into the work queue.
///
/// The tracker is incremented before each send so the count can never be
/// observed at zero while a line is in flight. Blank lines are skipped
/// entirely: never enqueued, never counted. Returns the number of lines
/// enqueued.
pub async fn read_entries<R>(
    input: R,
    queue: &flume::Sender<String>,
    tracker: &CompletionTracker,
) -> Result<u64, DomainError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut enqueued = 0u64;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| DomainError::Io(e.to_string()))?
    {
        if line.is_empty() {
            continue;
        }

        tracker.add(1);
        if queue.send(line).is_err() {
            // Every worker is gone; undo the unit we just took and stop.
            tracker.done();
            return Err(DomainError::Io("work queue closed unexpectedly".to_string()));
        }
        enqueued += 1;
    }

    debug!(enqueued, "line source finished");
    Ok(enqueued)
}
