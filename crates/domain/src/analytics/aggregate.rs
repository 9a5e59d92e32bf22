use std::collections::BTreeMap;

use group_fold_shared_kernel::Tally;

/// Key → accumulated value. Iterates in ascending key order.
pub type AggregateMap<K, A> = BTreeMap<K, A>;

/// Group `records` by `key` and fold each group with `combine`, left to right.
///
/// A group's accumulator starts as a clone of `init` the first time its key is
/// seen; keys that never occur in the input never appear in the result.
pub fn fold_by<'a, T, K, A, KF, CF>(
    records: impl IntoIterator<Item = &'a T>,
    key: KF,
    init: A,
    combine: CF,
) -> AggregateMap<K, A>
where
    T: 'a,
    K: Ord,
    A: Clone,
    KF: Fn(&T) -> K,
    CF: FnMut(&mut A, &T),
{
    fold_by_with(records, key, || init.clone(), combine)
}

/// Same as [`fold_by`], but the initial accumulator comes from a factory.
pub fn fold_by_with<'a, T, K, A, KF, IF, CF>(
    records: impl IntoIterator<Item = &'a T>,
    key: KF,
    init: IF,
    mut combine: CF,
) -> AggregateMap<K, A>
where
    T: 'a,
    K: Ord,
    KF: Fn(&T) -> K,
    IF: Fn() -> A,
    CF: FnMut(&mut A, &T),
{
    let mut map = AggregateMap::new();
    for record in records {
        let acc = map.entry(key(record)).or_insert_with(&init);
        combine(acc, record);
    }
    map
}

/// Number of records per key.
pub fn count_by<'a, T, K, KF>(records: impl IntoIterator<Item = &'a T>, key: KF) -> AggregateMap<K, Tally>
where
    T: 'a,
    K: Ord,
    KF: Fn(&T) -> K,
{
    fold_by(records, key, Tally::ZERO, |tally, _| *tally = tally.increment())
}

/// Projected values per key, in input order.
pub fn collect_by<'a, T, K, P, KF, PF>(
    records: impl IntoIterator<Item = &'a T>,
    key: KF,
    project: PF,
) -> AggregateMap<K, Vec<P>>
where
    T: 'a,
    K: Ord,
    KF: Fn(&T) -> K,
    PF: Fn(&T) -> P,
{
    fold_by_with(records, key, Vec::new, |acc, record| acc.push(project(record)))
}
