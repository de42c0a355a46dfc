use async_trait::async_trait;
use batchdns_application::ports::RecordLookup;
use batchdns_domain::{DomainError, MailExchanger, ServiceLookup, ServiceRecord};
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use tracing::debug;

/// Lookup port adapter backed by hickory-resolver.
///
/// Built from the system resolver configuration. No extra timeout layer is
/// imposed here; hickory's own per-query timeouts apply transparently to
/// the workers awaiting these calls.
pub struct HickoryLookup {
    resolver: TokioResolver,
}

impl HickoryLookup {
    pub fn new() -> Result<Self, DomainError> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| DomainError::Io(format!("failed to build resolver: {e}")))?
            .build();
        debug!("hickory resolver initialized from system configuration");
        Ok(Self { resolver })
    }
}

#[async_trait]
impl RecordLookup for HickoryLookup {
    async fn lookup_addresses(&self, name: &str) -> Result<Vec<IpAddr>, DomainError> {
        let lookup = self
            .resolver
            .lookup_ip(name)
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))?;
        Ok(lookup.iter().collect())
    }

    async fn lookup_mail_exchangers(
        &self,
        name: &str,
    ) -> Result<Vec<MailExchanger>, DomainError> {
        let lookup = self
            .resolver
            .mx_lookup(name)
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))?;
        Ok(lookup
            .iter()
            .map(|mx| MailExchanger {
                host: mx.exchange().to_string(),
                preference: mx.preference(),
            })
            .collect())
    }

    async fn lookup_reverse_names(&self, addr: IpAddr) -> Result<Vec<String>, DomainError> {
        let lookup = self
            .resolver
            .reverse_lookup(addr)
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))?;
        Ok(lookup.iter().map(|ptr| ptr.0.to_string()).collect())
    }

    async fn lookup_service_records(
        &self,
        service: &str,
        protocol: &str,
        domain: &str,
    ) -> Result<ServiceLookup, DomainError> {
        let query = format!("_{service}._{protocol}.{domain}");
        let lookup = self
            .resolver
            .srv_lookup(query)
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))?;

        let cname = lookup.as_lookup().query().name().to_string();
        let records = lookup
            .iter()
            .map(|srv| ServiceRecord {
                target: srv.target().to_string(),
                port: srv.port(),
                priority: srv.priority(),
                weight: srv.weight(),
            })
            .collect();

        Ok(ServiceLookup { cname, records })
    }
}
