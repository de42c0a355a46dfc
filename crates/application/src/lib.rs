//! batchdns application layer: the lookup port, the per-entry resolution
//! use case, and the producer/worker pipeline.
pub mod pipeline;
pub mod ports;
pub mod use_cases;

pub use pipeline::Pipeline;
pub use ports::RecordLookup;
pub use use_cases::ResolveEntryUseCase;
