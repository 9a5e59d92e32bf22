use crate::model::Person;

/// Text projection of a [`Person`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    FirstName,
    LastName,
    FullName,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::FirstName, Self::LastName, Self::FullName];

    pub fn project(self, person: &Person) -> String {
        match self {
            Self::FirstName => person.first_name().to_string(),
            Self::LastName => person.last_name().to_string(),
            Self::FullName => person.full_name(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::FullName => "full-name",
        }
    }
}
