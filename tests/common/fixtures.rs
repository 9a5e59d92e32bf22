// tests/common/fixtures.rs
use std::{fs, path::PathBuf};

use group_fold::Person;
use tempfile::TempDir;

/// The three-person roster plus a record that the `age < 30` selection drops.
#[allow(dead_code)]
pub fn roster_with_excluded() -> Vec<Person> {
    let mut roster = group_fold::sample_roster();
    roster.push(Person::new("Test", "xyz", 35));
    roster
}

/// Serialize `roster` into `dir/name` as JSON and return the path.
#[allow(dead_code)]
pub fn write_json_roster(dir: &TempDir, name: &str, roster: &[Person]) -> PathBuf {
    let path = dir.path().join(name);
    let json = serde_json::to_string_pretty(roster).expect("roster serializes");
    fs::write(&path, json).expect("write roster");
    path
}
