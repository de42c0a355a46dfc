pub mod resolver;

pub use resolver::HickoryLookup;
