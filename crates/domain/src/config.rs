pub mod aggregates;
pub mod value_objects;

pub use aggregates::{Query, QueryBuilder, QueryOutcome};
pub use value_objects::{AgeRange, ByKey, Field, GroupKey};
