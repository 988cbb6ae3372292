pub mod identifiers;

pub use identifiers::{IdentifierCase, IdentifierTable, NamingConvention};
