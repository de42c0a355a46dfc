use crate::DomainError;

/// One unit of work from the input file: `name<TAB>record-type`.
///
/// The record type is kept verbatim (everything after the first tab), so an
/// unrecognized type can be echoed back in the report exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub query_name: String,
    pub record_type: String,
}

impl Entry {
    /// Parse one input line. Splits on the first tab only; one trailing
    /// root dot is stripped from the query name if present.
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let (name, record_type) = line
            .split_once('\t')
            .ok_or_else(|| DomainError::MissingRecordType(line.to_string()))?;

        let query_name = name.strip_suffix('.').unwrap_or(name);

        Ok(Self {
            query_name: query_name.to_string(),
            record_type: record_type.to_string(),
        })
    }
}
