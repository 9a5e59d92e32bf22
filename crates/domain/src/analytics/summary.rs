use group_fold_shared_kernel::Tally;
use serde::Serialize;

use crate::{analytics::aggregate::fold_by, config::ByKey, model::Person};

/// Aggregation results for a single grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationGroup {
    pub key: String,
    pub count: Tally,
    /// Full names in input order.
    pub members: Vec<String>,
}

/// One labelled summary table, rows in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTable {
    pub label: String,
    pub rows: Vec<AggregationGroup>,
}

#[derive(Debug, Clone, Default)]
struct GroupState {
    count: Tally,
    members: Vec<String>,
}

/// Aggregator to group and summarise person records by requested keys.
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(records: &[Person], by_keys: &[ByKey]) -> Vec<GroupTable> {
        by_keys.iter().map(|key| Self::aggregate_by_key(records, *key)).collect()
    }

    fn aggregate_by_key(records: &[Person], key: ByKey) -> GroupTable {
        let map = fold_by(records, |p| key.extract(p), GroupState::default(), |state, p| {
            state.count = state.count.increment();
            state.members.push(p.full_name());
        });
        let rows = map
            .into_iter()
            .map(|(group, state)| AggregationGroup {
                key: group.to_string(),
                count: state.count,
                members: state.members,
            })
            .collect();
        GroupTable { label: key.label().to_string(), rows }
    }
}
