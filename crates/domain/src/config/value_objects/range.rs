use std::fmt;

use group_fold_shared_kernel::{Age, DomainError, DomainResult};

/// Age window used for selection: inclusive `min`, exclusive `max`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    min: Option<Age>,
    max: Option<Age>,
}

impl AgeRange {
    /// # Errors
    /// Returns [`DomainError::RangeValidation`] when the window is empty (`min >= max`).
    pub fn new(min: Option<Age>, max: Option<Age>) -> DomainResult<Self> {
        if let (Some(lo), Some(hi)) = (min, max)
            && lo >= hi
        {
            return Err(DomainError::RangeValidation {
                field: "age".to_string(),
                min: lo.to_string(),
                max: hi.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// Everyone strictly younger than `max`.
    pub fn below(max: impl Into<Age>) -> Self {
        Self { min: None, max: Some(max.into()) }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn min(&self) -> Option<Age> {
        self.min
    }

    pub fn max(&self) -> Option<Age> {
        self.max
    }

    #[inline]
    pub fn contains(&self, age: Age) -> bool {
        self.min.is_none_or(|m| age >= m) && self.max.is_none_or(|m| age < m)
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (None, None) => f.write_str("any age"),
            (Some(lo), None) => write!(f, "age >= {lo}"),
            (None, Some(hi)) => write!(f, "age < {hi}"),
            (Some(lo), Some(hi)) => write!(f, "{lo} <= age < {hi}"),
        }
    }
}
