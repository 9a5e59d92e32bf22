//! Property tests for the grouped fold and the two selection strategies.

use std::collections::BTreeMap;

use group_fold::{AgeRange, ByKey, Field, Person, Query, SelectStrategy, collect_by, count_by};
use proptest::prelude::*;

fn person() -> impl Strategy<Value = Person> {
    ("[A-C][a-c]{0,2}", "[x-z]{1,2}", 15u32..45).prop_map(|(first, last, age)| Person::new(first, last, age))
}

fn any_field() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

proptest! {
    #[test]
    fn counts_agree_with_grouped_collection(records in prop::collection::vec(person(), 0..50)) {
        let counts = count_by(&records, |p| p.last_name().clone());
        let grouped = collect_by(&records, |p| p.last_name().clone(), Person::full_name);

        prop_assert_eq!(counts.len(), grouped.len());
        for (key, tally) in &counts {
            prop_assert_eq!(tally.value(), grouped[key].len());
        }
    }

    #[test]
    fn summary_rows_match_naive_grouping(records in prop::collection::vec(person(), 0..50)) {
        let outcome = Query::builder().by(vec![ByKey::FirstName]).build().unwrap().run(&records);

        let mut naive: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for p in &records {
            naive.entry(p.first_name().to_string()).or_default().push(p.full_name());
        }
        let rows: BTreeMap<String, Vec<String>> = outcome.groups[0]
            .rows
            .iter()
            .map(|r| (r.key.clone(), r.members.clone()))
            .collect();
        prop_assert_eq!(rows, naive);
    }

    #[test]
    fn strategies_agree_for_any_query(
        records in prop::collection::vec(person(), 0..50),
        max in 15u32..50,
        field in any_field(),
    ) {
        let chained = Query::builder()
            .range(AgeRange::below(max))
            .field(field)
            .strategy(SelectStrategy::Chained)
            .build()
            .unwrap();
        let folded = Query { strategy: SelectStrategy::Folded, ..chained.clone() };

        prop_assert_eq!(chained.select(&records), folded.select(&records));
        prop_assert!(chained.verify(&records).is_ok());
    }
}
