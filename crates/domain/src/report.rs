use crate::DomainError;

const SEPARATOR: &str = "----------------------------------";

/// The finished report for one entry: either a formatted response or the
/// error that stopped it. Never both.
#[derive(Debug, Clone)]
pub struct Report {
    pub query: String,
    pub record_type: String,
    pub outcome: Result<String, DomainError>,
}

impl Report {
    /// Render the full output block. The block is rendered as one string so
    /// the sink can write it under a single lock acquisition.
    pub fn render(&self) -> String {
        let mut block = String::with_capacity(64);
        block.push_str(SEPARATOR);
        block.push('\n');
        block.push_str("Query: ");
        block.push_str(&self.query);
        block.push('\n');
        block.push_str("Type: ");
        block.push_str(&self.record_type);
        block.push('\n');
        match &self.outcome {
            Ok(response) => {
                block.push_str("Response: ");
                block.push_str(response);
            }
            Err(err) => {
                block.push_str("Error: ");
                block.push_str(&err.to_string());
            }
        }
        block.push('\n');
        block
    }
}
