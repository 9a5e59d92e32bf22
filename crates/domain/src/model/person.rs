use group_fold_shared_kernel::{Age, FirstName, LastName};
use serde::{Deserialize, Serialize};

/// 集計対象となる1件のレコード
///
/// Field names follow the roster documents (`firstName`, `lastName`, `age`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    first_name: FirstName,
    last_name: LastName,
    age: Age,
}

impl Person {
    pub fn new(first_name: impl Into<FirstName>, last_name: impl Into<LastName>, age: impl Into<Age>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: age.into(),
        }
    }

    #[inline]
    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &LastName {
        &self.last_name
    }

    #[inline]
    pub fn age(&self) -> Age {
        self.age
    }

    /// `"{first} {last}"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
