//! Validated student ages.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ValidationError;

/// A student age.
///
/// Input ages come from [`AgePolicy::check`], so a `Student` never needs to
/// re-validate its age. Deserialization trusts the stored value as-is; no
/// policy is applied to previously exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive age bounds accepted on insertion.
///
/// Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePolicy {
    min: u32,
    max: u32,
}

impl AgePolicy {
    pub const DEFAULT: AgePolicy = AgePolicy { min: 16, max: 100 };

    pub const fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvalidAgeRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Accepts `age` when it lies within `min..=max`.
    ///
    /// Takes a signed value so negative input is reported rather than
    /// wrapped.
    pub fn check(self, age: i64) -> Result<Age, ValidationError> {
        let out_of_range = ValidationError::AgeOutOfRange {
            age,
            min: self.min,
            max: self.max,
        };
        let Ok(value) = u32::try_from(age) else {
            return Err(out_of_range);
        };
        if (self.min..=self.max).contains(&value) {
            Ok(Age(value))
        } else {
            Err(out_of_range)
        }
    }
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
