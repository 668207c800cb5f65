//! The student record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Age, Gpa, GpaStanding, Grade, StudentName};

/// A single student's attribute set.
///
/// Immutable once built: there are accessors but no setters. The grade is
/// derived from the GPA on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    name: StudentName,
    age: Age,
    gpa: Gpa,
    active: bool,
}

impl Student {
    #[must_use]
    pub fn new(name: StudentName, age: Age, gpa: Gpa, active: bool) -> Self {
        Self {
            name,
            age,
            gpa,
            active,
        }
    }

    #[must_use]
    pub fn name(&self) -> &StudentName {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> Age {
        self.age
    }

    #[must_use]
    pub fn gpa(&self) -> Gpa {
        self.gpa
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        self.gpa.grade()
    }

    #[must_use]
    pub fn standing(&self) -> GpaStanding {
        self.gpa.standing()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "active" } else { "inactive" };
        write!(
            f,
            "{} (age {}, GPA {:.2}, grade {}, {status})",
            self.name,
            self.age,
            self.gpa,
            self.grade()
        )
    }
}
