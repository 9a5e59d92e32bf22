// tests/integration/scenarios.rs
use group_fold::{Age, ByKey, Person, Query, SelectStrategy, Tally, count_by, select_chained, select_folded};

#[path = "../common/mod.rs"]
mod common;
use common::{PersonBuilder, roster_with_excluded};

fn under_thirty(p: &Person) -> bool {
    p.age().years() < 30
}

fn first_name(p: &Person) -> String {
    p.first_name().to_string()
}

#[test]
fn sample_roster_counts_and_names() {
    let roster = group_fold::sample_roster();

    let counts: Vec<(Age, Tally)> = count_by(&roster, Person::age).into_iter().collect();
    assert_eq!(
        counts,
        vec![(Age::new(21), Tally::new(1)), (Age::new(23), Tally::new(1)), (Age::new(29), Tally::new(1))]
    );

    assert_eq!(select_chained(&roster, under_thirty, first_name), ["Anup", "Anthony", "Rahul"]);
    assert_eq!(select_folded(&roster, under_thirty, first_name), ["Anup", "Anthony", "Rahul"]);
}

#[test]
fn excluded_record_only_adds_a_count() {
    let roster = roster_with_excluded();

    let counts = count_by(&roster, Person::age);
    assert_eq!(counts.len(), 4);
    assert_eq!(counts[&Age::new(35)], 1usize);

    for strategy in SelectStrategy::ALL {
        assert_eq!(strategy.select(&roster, under_thirty, first_name), ["Anup", "Anthony", "Rahul"]);
    }
}

#[test]
fn query_summarises_every_requested_key() {
    let roster = vec![
        PersonBuilder::new("Asha").last("rao").age(41).build(),
        PersonBuilder::new("Ben").last("rao").age(19).build(),
        PersonBuilder::new("Asha").last("kim").age(19).build(),
    ];
    let query = Query::builder().by(vec![ByKey::FirstName, ByKey::LastName, ByKey::Age]).build().unwrap();
    let outcome = query.run(&roster);

    let summary: Vec<(&str, Vec<(&str, usize)>)> = outcome
        .groups
        .iter()
        .map(|t| (t.label.as_str(), t.rows.iter().map(|r| (r.key.as_str(), r.count.value())).collect()))
        .collect();
    let expected: Vec<(&str, Vec<(&str, usize)>)> = vec![
        ("By First Name", vec![("Asha", 2), ("Ben", 1)]),
        ("By Last Name", vec![("kim", 1), ("rao", 2)]),
        ("By Age", vec![("19", 2), ("41", 1)]),
    ];
    assert_eq!(summary, expected);
    assert_eq!(outcome.selected, ["Ben", "Asha"]);
}
