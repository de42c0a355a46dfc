use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Lookup for {0} not supported")]
    UnsupportedRecordType(String),

    #[error("SRV query '{0}' should be formatted as 'service.protocol.domain'")]
    MalformedSrvQuery(String),

    #[error("PTR query '{0}' should be four dot-separated octets of an IPv4 address")]
    MalformedPtrQuery(String),

    #[error("entry '{0}' has no tab-separated record type")]
    MissingRecordType(String),

    /// Failure reported by the underlying resolver, message carried verbatim.
    #[error("{0}")]
    Lookup(String),

    #[error("I/O error: {0}")]
    Io(String),
}
