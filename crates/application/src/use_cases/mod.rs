pub mod resolve_entry;

pub use resolve_entry::ResolveEntryUseCase;
