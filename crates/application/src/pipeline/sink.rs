use batchdns_domain::Report;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::warn;

/// Serialized report writer shared by all workers.
///
/// A block is rendered first and written under one lock acquisition, so two
/// concurrently completing entries can never interleave their lines. There
/// is no ordering guarantee across workers.
pub struct ReportSink {
    out: Mutex<Box<dyn AsyncWrite + Send + Unpin>>,
}

impl ReportSink {
    pub fn new(out: Box<dyn AsyncWrite + Send + Unpin>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Write failures are logged and swallowed; a broken output stream must
    /// not stall completion accounting.
    pub async fn write_report(&self, report: &Report) {
        let block = report.render();
        let mut out = self.out.lock().await;
        if let Err(err) = out.write_all(block.as_bytes()).await {
            warn!(query = %report.query, %err, "failed to write report block");
            return;
        }
        if let Err(err) = out.flush().await {
            warn!(query = %report.query, %err, "failed to flush report block");
        }
    }
}
