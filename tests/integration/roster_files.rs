// tests/integration/roster_files.rs
use std::fs;

use group_fold::{GroupFoldError, InfrastructureError, Query, RosterReader, run_file};

#[path = "../common/mod.rs"]
mod common;
use common::{roster_with_excluded, write_json_roster};

#[test]
fn json_roster_round_trips_through_reader() {
    let dir = tempfile::tempdir().unwrap();
    let roster = roster_with_excluded();
    let path = write_json_roster(&dir, "people.json", &roster);

    assert_eq!(RosterReader::read(&path).unwrap(), roster);
}

#[test]
fn run_file_applies_default_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json_roster(&dir, "people.json", &roster_with_excluded());

    let outcome = run_file(&path, &Query::default()).unwrap();
    assert_eq!(outcome.groups[0].rows.len(), 4);
    assert_eq!(outcome.selected, ["Anup", "Anthony", "Rahul"]);
}

#[test]
fn empty_roster_file_gives_empty_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    let outcome = run_file(&path, &Query::default()).unwrap();
    assert!(outcome.groups[0].rows.is_empty());
    assert!(outcome.selected.is_empty());
}

#[test]
fn yaml_roster_is_read_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.yml");
    fs::write(&path, "- firstName: Anup\n  lastName: abc\n  age: 21\n").unwrap();

    let outcome = run_file(&path, &Query::default()).unwrap();
    assert_eq!(outcome.selected, ["Anup"]);
}

#[test]
fn malformed_roster_is_reported_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = run_file(&path, &Query::default()).unwrap_err();
    match err {
        GroupFoldError::Context { context, source } => {
            assert!(context.starts_with("loading roster"));
            assert!(matches!(
                *source,
                GroupFoldError::Infrastructure(InfrastructureError::SerializationError { .. })
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}
