//! batchdns infrastructure layer: the hickory-resolver adapter behind the
//! application's lookup port.
pub mod dns;

pub use dns::HickoryLookup;
