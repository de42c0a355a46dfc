use async_trait::async_trait;
use batchdns_domain::{DomainError, MailExchanger, ServiceLookup};
use std::net::IpAddr;

/// The resolution capability the pipeline delegates to. The application
/// layer never touches the DNS wire protocol; it only consumes these four
/// operations.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Resolve a name to all of its addresses, both families.
    async fn lookup_addresses(&self, name: &str) -> Result<Vec<IpAddr>, DomainError>;

    /// Resolve the mail exchangers for a name.
    async fn lookup_mail_exchangers(&self, name: &str)
        -> Result<Vec<MailExchanger>, DomainError>;

    /// Resolve an address back to its hostnames.
    async fn lookup_reverse_names(&self, addr: IpAddr) -> Result<Vec<String>, DomainError>;

    /// Resolve the SRV records for `_service._protocol.domain`.
    async fn lookup_service_records(
        &self,
        service: &str,
        protocol: &str,
        domain: &str,
    ) -> Result<ServiceLookup, DomainError>;
}
