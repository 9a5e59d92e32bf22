// crates/shared-kernel/src/value_objects/mod.rs
pub mod person;
pub mod tally;

pub use person::{Age, FirstName, LastName};
pub use tally::Tally;
