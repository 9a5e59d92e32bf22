use crate::model::Person;

/// Built-in roster used when no input file is supplied.
pub fn sample_roster() -> Vec<Person> {
    vec![
        Person::new("Anup", "abc", 21),
        Person::new("Anthony", "dfg", 23),
        Person::new("Rahul", "mnop", 29),
    ]
}
