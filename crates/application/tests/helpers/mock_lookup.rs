use async_trait::async_trait;
use batchdns_application::ports::RecordLookup;
use batchdns_domain::{DomainError, MailExchanger, ServiceLookup};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// In-memory lookup capability for tests.
///
/// Names with no configured records resolve successfully to an empty list;
/// set a failure message to make every operation fail with it.
#[derive(Default)]
pub struct MockLookup {
    addresses: RwLock<HashMap<String, Vec<IpAddr>>>,
    mail: RwLock<HashMap<String, Vec<MailExchanger>>>,
    reverse: RwLock<HashMap<IpAddr, Vec<String>>>,
    services: RwLock<HashMap<String, ServiceLookup>>,
    fail_message: RwLock<Option<String>>,
    call_count: AtomicU64,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_addresses(&self, name: &str, addrs: Vec<&str>) {
        self.addresses.write().unwrap().insert(
            name.to_string(),
            addrs.into_iter().map(|a| a.parse().unwrap()).collect(),
        );
    }

    pub fn set_mail_exchangers(&self, name: &str, exchangers: Vec<(&str, u16)>) {
        self.mail.write().unwrap().insert(
            name.to_string(),
            exchangers
                .into_iter()
                .map(|(host, preference)| MailExchanger {
                    host: host.to_string(),
                    preference,
                })
                .collect(),
        );
    }

    pub fn set_reverse_names(&self, addr: &str, names: Vec<&str>) {
        self.reverse.write().unwrap().insert(
            addr.parse().unwrap(),
            names.into_iter().map(|n| n.to_string()).collect(),
        );
    }

    pub fn set_service(&self, service: &str, protocol: &str, domain: &str, found: ServiceLookup) {
        self.services
            .write()
            .unwrap()
            .insert(service_key(service, protocol, domain), found);
    }

    pub fn set_fail_message(&self, message: &str) {
        *self.fail_message.write().unwrap() = Some(message.to_string());
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match self.fail_message.read().unwrap().as_ref() {
            Some(message) => Err(DomainError::Lookup(message.clone())),
            None => Ok(()),
        }
    }
}

fn service_key(service: &str, protocol: &str, domain: &str) -> String {
    format!("{service}/{protocol}/{domain}")
}

#[async_trait]
impl RecordLookup for MockLookup {
    async fn lookup_addresses(&self, name: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.check_failure()?;
        Ok(self
            .addresses
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup_mail_exchangers(
        &self,
        name: &str,
    ) -> Result<Vec<MailExchanger>, DomainError> {
        self.check_failure()?;
        Ok(self
            .mail
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup_reverse_names(&self, addr: IpAddr) -> Result<Vec<String>, DomainError> {
        self.check_failure()?;
        Ok(self
            .reverse
            .read()
            .unwrap()
            .get(&addr)
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup_service_records(
        &self,
        service: &str,
        protocol: &str,
        domain: &str,
    ) -> Result<ServiceLookup, DomainError> {
        self.check_failure()?;
        Ok(self
            .services
            .read()
            .unwrap()
            .get(&service_key(service, protocol, domain))
            .cloned()
            .unwrap_or_else(|| ServiceLookup {
                cname: format!("_{service}._{protocol}.{domain}."),
                records: Vec::new(),
            }))
    }
}
