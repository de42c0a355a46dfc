#![allow(dead_code)]

pub mod mock_lookup;
pub mod test_writer;

pub use mock_lookup::MockLookup;
pub use test_writer::SharedBuffer;
