// crates/shared-kernel/tests/person_values.rs
use group_fold_shared_kernel::{Age, FirstName, LastName};

#[test]
fn names_display_verbatim() {
    assert_eq!(FirstName::from("Anup").to_string(), "Anup");
    assert_eq!(LastName::new(String::from("mnop")).to_string(), "mnop");
}

#[test]
fn names_compare_with_str() {
    let name = FirstName::from("Anthony");
    assert_eq!(name, "Anthony");
    assert_eq!(name.len(), 7);
    assert_eq!(name.into_string(), "Anthony");
}

#[test]
fn ages_order_numerically() {
    let mut ages = vec![Age::new(100), Age::new(21), Age::new(9)];
    ages.sort();
    assert_eq!(ages, vec![Age::new(9), Age::new(21), Age::new(100)]);
    assert_eq!(Age::from(29), 29u32);
}
