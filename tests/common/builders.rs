// tests/common/builders.rs
// テストデータ構築用ビルダー
use group_fold::Person;

/// Personのテストビルダー
#[allow(dead_code)]
pub struct PersonBuilder {
    first: String,
    last: String,
    age: u32,
}

#[allow(dead_code)]
impl PersonBuilder {
    pub fn new(first: impl Into<String>) -> Self {
        Self { first: first.into(), last: "doe".to_string(), age: 20 }
    }

    pub fn last(mut self, last: impl Into<String>) -> Self {
        self.last = last.into();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn build(self) -> Person {
        Person::new(self.first, self.last, self.age)
    }
}
