use derive_builder::Builder;
use group_fold_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

use crate::{
    analytics::{Aggregator, GroupTable, SelectStrategy, select_chained, select_folded},
    config::{AgeRange, ByKey, Field},
    model::Person,
};

/// Resolved request: which summaries to build and which names to select.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Query {
    #[builder(default = "vec![ByKey::Age]")]
    pub by: Vec<ByKey>,
    #[builder(default = "AgeRange::below(30)")]
    pub range: AgeRange,
    #[builder(default)]
    pub field: Field,
    #[builder(default)]
    pub strategy: SelectStrategy,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            by: vec![ByKey::Age],
            range: AgeRange::below(30),
            field: Field::default(),
            strategy: SelectStrategy::default(),
        }
    }
}

/// Everything a query produces for one roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    pub groups: Vec<GroupTable>,
    pub selected: Vec<String>,
}

impl Query {
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Summaries for every `by` key plus the selection under `strategy`.
    pub fn run(&self, records: &[Person]) -> QueryOutcome {
        log::debug!(
            "folding {} records by [{}] with {} selection",
            records.len(),
            self.by.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", "),
            self.strategy.as_str()
        );
        let groups = Aggregator::aggregate(records, &self.by);
        let selected = self.select(records);
        QueryOutcome { groups, selected }
    }

    pub fn select(&self, records: &[Person]) -> Vec<String> {
        self.strategy.select(records, |p| self.range.contains(p.age()), |p| self.field.project(p))
    }

    /// Runs both selection strategies and returns the shared result.
    ///
    /// # Errors
    /// Returns [`DomainError::StrategyMismatch`] if the two strategies disagree.
    pub fn verify(&self, records: &[Person]) -> DomainResult<Vec<String>> {
        let keep = |p: &Person| self.range.contains(p.age());
        let project = |p: &Person| self.field.project(p);

        let chained = select_chained(records, keep, project);
        let folded = select_folded(records, keep, project);
        log::trace!("chained={chained:?} folded={folded:?}");

        if chained == folded {
            Ok(chained)
        } else {
            Err(DomainError::StrategyMismatch { chained, folded })
        }
    }
}
