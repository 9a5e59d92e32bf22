pub mod by_key;
pub mod field;
pub mod range;

pub use by_key::{ByKey, GroupKey};
pub use field::Field;
pub use range::AgeRange;
