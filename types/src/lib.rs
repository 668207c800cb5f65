//! Core domain types for the student roster.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Validated values are constructed once at the input boundary; a `Student`
//! built from them never re-checks its fields.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod age;
mod grade;
mod student;

pub use age::{Age, AgePolicy};
pub use grade::{Gpa, GpaStanding, Grade};
pub use student::Student;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Input rejected before it reaches the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("age {age} is outside the accepted range {min}-{max}")]
    AgeOutOfRange { age: i64, min: u32, max: u32 },
    #[error("minimum age ({min}) must not exceed maximum age ({max})")]
    InvalidAgeRange { min: u32, max: u32 },
}

// ============================================================================
// Student name
// ============================================================================

/// A student name guaranteed to be non-empty (after trimming).
///
/// The original text is kept as entered, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentName(String);

impl StudentName {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(ValidationError::EmptyName)
        } else {
            Ok(Self(value))
        }
    }

    /// Case-insensitive exact comparison. No substring or fuzzy matching.
    ///
    /// Folds one `char` at a time (uppercase, then lowercase) so the result
    /// does not depend on a character's position in the word: `Σ`, `σ` and
    /// the final `ς` all compare equal.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.0 == query || fold_case(&self.0).eq(fold_case(query))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn fold_case(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

impl TryFrom<String> for StudentName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StudentName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudentName> for String {
    fn from(value: StudentName) -> Self {
        value.0
    }
}

impl std::ops::Deref for StudentName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
