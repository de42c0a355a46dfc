pub mod lookup;

pub use lookup::RecordLookup;
