use std::{fmt, str::FromStr};

use group_fold_shared_kernel::{Age, DomainError};
use serde::Serialize;

use crate::model::Person;

/// Value object describing grouping keys for summarisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByKey {
    Age,
    FirstName,
    LastName,
}

impl ByKey {
    pub const ALL: [Self; 3] = [Self::Age, Self::FirstName, Self::LastName];

    pub fn extract(self, person: &Person) -> GroupKey {
        match self {
            Self::Age => GroupKey::Age(person.age()),
            Self::FirstName => GroupKey::Text(person.first_name().to_string()),
            Self::LastName => GroupKey::Text(person.last_name().to_string()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "By Age",
            Self::FirstName => "By First Name",
            Self::LastName => "By Last Name",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
        }
    }
}

impl FromStr for ByKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "age" => Ok(Self::Age),
            "first-name" | "first_name" | "firstname" | "first" => Ok(Self::FirstName),
            "last-name" | "last_name" | "lastname" | "last" => Ok(Self::LastName),
            _ => Err(DomainError::InvalidGroupingKey {
                key: s.to_string(),
                expected: Self::ALL.map(Self::as_str).join(", "),
            }),
        }
    }
}

/// Key produced by a [`ByKey`]; ages sort numerically, text lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Age(Age),
    Text(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Age(age) => write!(f, "{age}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
