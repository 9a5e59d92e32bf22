//! Group ordered records by a derived key and fold each group, left to right.
//!
//! ```
//! use group_fold::{Person, count_by, sample_roster, select_folded};
//!
//! let roster = sample_roster();
//! let by_age = count_by(&roster, Person::age);
//! assert_eq!(by_age.len(), 3);
//!
//! let young = select_folded(&roster, |p| p.age().years() < 30, |p| p.first_name().to_string());
//! assert_eq!(young, ["Anup", "Anthony", "Rahul"]);
//! ```
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

pub use group_fold_domain::{
    AggregateMap, AggregationGroup, Aggregator, AgeRange, ByKey, Field, GroupKey, GroupTable, Person, Query,
    QueryBuilder, QueryOutcome, SelectStrategy, collect_by, count_by, fold_by, fold_by_with, sample_roster,
    select_chained, select_folded,
};
pub use group_fold_infra::{RosterFormat, RosterReader};
pub use group_fold_shared_kernel::{
    Age, DomainError, ErrorContext, FirstName, GroupFoldError, InfrastructureError, LastName, Result, Tally,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a roster file and run `query` over it.
///
/// # Errors
/// Returns the read/parse failure wrapped with the file path as context.
pub fn run_file(path: &Path, query: &Query) -> Result<QueryOutcome> {
    let roster = RosterReader::read(path).with_context(|| format!("loading roster {}", path.display()))?;
    Ok(query.run(&roster))
}
