/// One MX record as reported by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailExchanger {
    pub host: String,
    pub preference: u16,
}

/// One SRV record as reported by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub target: String,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

/// Result of an SRV lookup: the answered name plus its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLookup {
    pub cname: String,
    pub records: Vec<ServiceRecord>,
}
