use crate::ports::RecordLookup;
use batchdns_domain::{DomainError, Entry};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/// Dispatches one parsed entry to the matching lookup operation and formats
/// the outcome into the response string the report carries.
#[derive(Clone)]
pub struct ResolveEntryUseCase {
    lookup: Arc<dyn RecordLookup>,
}

impl ResolveEntryUseCase {
    pub fn new(lookup: Arc<dyn RecordLookup>) -> Self {
        Self { lookup }
    }

    /// An empty `Ok` string means the lookup succeeded with zero records.
    pub async fn execute(&self, entry: &Entry) -> Result<String, DomainError> {
        match entry.record_type.as_str() {
            "A" | "AAAA" => self.resolve_addresses(&entry.query_name).await,
            "PTR" => self.resolve_reverse(&entry.query_name).await,
            "MX" => self.resolve_mail(&entry.query_name).await,
            "SRV" => self.resolve_service(&entry.query_name).await,
            other => Err(DomainError::UnsupportedRecordType(other.to_string())),
        }
    }

    async fn resolve_addresses(&self, name: &str) -> Result<String, DomainError> {
        let addresses = self.lookup.lookup_addresses(name).await?;
        let mut response = String::new();
        for addr in addresses {
            match addr {
                IpAddr::V4(v4) => response.push_str(&format!("[IPv4:{v4}]")),
                IpAddr::V6(v6) => response.push_str(&format!("[IPv6:{v6}]")),
            }
        }
        Ok(response)
    }

    async fn resolve_reverse(&self, name: &str) -> Result<String, DomainError> {
        let addr = reverse_ptr_octets(name)?;
        let names = self.lookup.lookup_reverse_names(IpAddr::V4(addr)).await?;
        let mut response = String::new();
        for host in names {
            response.push_str(&format!("[name:{host}]"));
        }
        Ok(response)
    }

    async fn resolve_mail(&self, name: &str) -> Result<String, DomainError> {
        let exchangers = self.lookup.lookup_mail_exchangers(name).await?;
        let mut response = String::new();
        for mx in exchangers {
            response.push_str(&format!("[host:{},pref:{}]", mx.host, mx.preference));
        }
        Ok(response)
    }

    async fn resolve_service(&self, name: &str) -> Result<String, DomainError> {
        let (service, protocol, domain) = parse_srv_name(name)?;
        let found = self
            .lookup
            .lookup_service_records(service, protocol, domain)
            .await?;
        let mut response = format!("cname:{}", found.cname);
        for srv in found.records {
            response.push_str(&format!(
                "[target:{},port:{},priority:{},weight:{}]",
                srv.target, srv.port, srv.priority, srv.weight
            ));
        }
        Ok(response)
    }
}

/// Split an SRV query name of the form `_service._protocol.domain` on its
/// first two dots, stripping one leading underscore from the service and
/// protocol labels.
fn parse_srv_name(name: &str) -> Result<(&str, &str, &str), DomainError> {
    let malformed = || DomainError::MalformedSrvQuery(name.to_string());

    let (service, rest) = name.split_once('.').ok_or_else(malformed)?;
    let (protocol, domain) = rest.split_once('.').ok_or_else(malformed)?;

    let service = service.strip_prefix('_').unwrap_or(service);
    let protocol = protocol.strip_prefix('_').unwrap_or(protocol);

    Ok((service, protocol, domain))
}

/// A PTR query name arrives in reverse-lookup-zone order (`4.3.2.1` for
/// the address `1.2.3.4`). Reassemble and parse it as an IPv4 address.
fn reverse_ptr_octets(name: &str) -> Result<Ipv4Addr, DomainError> {
    let malformed = || DomainError::MalformedPtrQuery(name.to_string());

    let octets: Vec<&str> = name.split('.').collect();
    if octets.len() != 4 {
        return Err(malformed());
    }

    format!("{}.{}.{}.{}", octets[3], octets[2], octets[1], octets[0])
        .parse()
        .map_err(|_| malformed())
}
