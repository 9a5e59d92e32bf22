// crates/shared-kernel/tests/serde_roundtrip.rs
use group_fold_shared_kernel::{Age, FirstName, Tally};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    name: FirstName,
    age: Age,
    count: Tally,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper { name: FirstName::from("Rahul"), age: Age::new(29), count: Tally::from(3) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"name":"Rahul","age":29,"count":3}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
