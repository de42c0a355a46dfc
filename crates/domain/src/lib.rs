//! batchdns domain layer
pub mod entry;
pub mod errors;
pub mod records;
pub mod report;

pub use entry::Entry;
pub use errors::DomainError;
pub use records::{MailExchanger, ServiceLookup, ServiceRecord};
pub use report::Report;
