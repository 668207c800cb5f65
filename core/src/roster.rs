//! Caller-facing roster API.
//!
//! Input is validated here before anything touches the registry, so a
//! rejected `add` leaves the roster exactly as it was.

use roster_config::{DEFAULT_SCHOOL, RosterConfig};
use roster_types::{AgePolicy, Gpa, Student, StudentName, ValidationError};
use thiserror::Error;

use crate::registry::Registry;
use crate::search::find_by_name;
use crate::stats::{Stats, StatsError, summarize};

/// Non-fatal outcomes reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("student '{query}' not found")]
    NotFound { query: String },
    #[error("no students available for statistics")]
    EmptyDataset,
}

impl From<StatsError> for RosterError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::EmptyDataset => RosterError::EmptyDataset,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Roster {
    registry: Registry,
    age_policy: AgePolicy,
    school: String,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(AgePolicy::DEFAULT)
    }

    #[must_use]
    pub fn with_policy(age_policy: AgePolicy) -> Self {
        Self {
            registry: Registry::new(),
            age_policy,
            school: DEFAULT_SCHOOL.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &RosterConfig) -> Self {
        Self {
            registry: Registry::new(),
            age_policy: config.age_policy(),
            school: config.school().to_string(),
        }
    }

    /// Validate and append a new record.
    ///
    /// The name is checked before the age; the first failure is returned.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        age: i64,
        gpa: f64,
        active: bool,
    ) -> Result<&Student, RosterError> {
        let name = StudentName::new(name).inspect_err(|err| {
            tracing::debug!(%err, "Rejected student");
        })?;
        let age = self.age_policy.check(age).inspect_err(|err| {
            tracing::debug!(name = %name, %err, "Rejected student");
        })?;
        Ok(self.registry.add(Student::new(name, age, Gpa::new(gpa), active)))
    }

    #[must_use]
    pub fn list(&self) -> &[Student] {
        self.registry.all()
    }

    pub fn search(&self, name: &str) -> Result<&Student, RosterError> {
        find_by_name(self.registry.all(), name).ok_or_else(|| RosterError::NotFound {
            query: name.to_string(),
        })
    }

    pub fn stats(&self) -> Result<Stats, RosterError> {
        Ok(summarize(self.registry.all())?)
    }

    pub fn clear(&mut self) {
        self.registry.clear();
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.registry.count()
    }

    /// Successful insertions over the roster's lifetime, unaffected by `clear`.
    #[must_use]
    pub fn total_added(&self) -> u64 {
        self.registry.total_added()
    }

    #[must_use]
    pub fn age_policy(&self) -> AgePolicy {
        self.age_policy
    }

    #[must_use]
    pub fn school(&self) -> &str {
        &self.school
    }
}
