#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod sample;

pub use analytics::{
    AggregateMap, AggregationGroup, Aggregator, GroupTable, SelectStrategy, collect_by, count_by, fold_by,
    fold_by_with, select_chained, select_folded,
};
pub use config::{AgeRange, ByKey, Field, GroupKey, Query, QueryBuilder, QueryOutcome};
pub use model::Person;
pub use sample::sample_roster;
