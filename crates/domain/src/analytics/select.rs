/// Filter with `predicate`, then project the survivors: two passes.
pub fn select_chained<'a, T, P, F, M>(records: impl IntoIterator<Item = &'a T>, predicate: F, project: M) -> Vec<P>
where
    T: 'a,
    F: Fn(&T) -> bool,
    M: Fn(&T) -> P,
{
    records.into_iter().filter(|&record| predicate(record)).map(project).collect()
}

/// Filter and project in one fold whose accumulator only grows on a match.
pub fn select_folded<'a, T, P, F, M>(records: impl IntoIterator<Item = &'a T>, predicate: F, project: M) -> Vec<P>
where
    T: 'a,
    F: Fn(&T) -> bool,
    M: Fn(&T) -> P,
{
    records.into_iter().fold(Vec::new(), |mut acc, record| {
        if predicate(record) {
            acc.push(project(record));
        }
        acc
    })
}

/// How a filter-then-project selection is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectStrategy {
    #[default]
    Chained,
    Folded,
}

impl SelectStrategy {
    pub const ALL: [Self; 2] = [Self::Chained, Self::Folded];

    pub fn select<'a, T, P, F, M>(self, records: impl IntoIterator<Item = &'a T>, predicate: F, project: M) -> Vec<P>
    where
        T: 'a,
        F: Fn(&T) -> bool,
        M: Fn(&T) -> P,
    {
        match self {
            Self::Chained => select_chained(records, predicate, project),
            Self::Folded => select_folded(records, predicate, project),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chained => "chained",
            Self::Folded => "folded",
        }
    }
}
