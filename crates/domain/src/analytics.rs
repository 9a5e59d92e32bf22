pub mod aggregate;
pub mod select;
pub mod summary;

pub use aggregate::{AggregateMap, collect_by, count_by, fold_by, fold_by_with};
pub use select::{SelectStrategy, select_chained, select_folded};
pub use summary::{AggregationGroup, Aggregator, GroupTable};
