//! GPA values and the labels derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade point average.
///
/// The nominal domain is 0.0-4.0 but it is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gpa(f64);

impl Gpa {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn grade(self) -> Grade {
        Grade::for_gpa(self.0)
    }

    #[must_use]
    pub fn standing(self) -> GpaStanding {
        GpaStanding::for_gpa(self.0)
    }
}

impl From<f64> for Gpa {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Letter grade derived from a GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Thresholds checked in descending order; the first match wins.
    const THRESHOLDS: [(f64, Grade); 6] = [
        (3.7, Grade::A),
        (3.3, Grade::BPlus),
        (3.0, Grade::B),
        (2.7, Grade::CPlus),
        (2.3, Grade::C),
        (2.0, Grade::D),
    ];

    /// Total over every `f64`. NaN falls through to `F`.
    #[must_use]
    pub fn for_gpa(gpa: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(threshold, _)| gpa >= *threshold)
            .map_or(Grade::F, |(_, grade)| *grade)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse feedback label shown when a record is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GpaStanding {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl GpaStanding {
    #[must_use]
    pub fn for_gpa(gpa: f64) -> Self {
        if gpa >= 3.5 {
            GpaStanding::Excellent
        } else if gpa >= 3.0 {
            GpaStanding::Good
        } else if gpa >= 2.0 {
            GpaStanding::Average
        } else {
            GpaStanding::NeedsImprovement
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GpaStanding::Excellent => "Excellent",
            GpaStanding::Good => "Good",
            GpaStanding::Average => "Average",
            GpaStanding::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for GpaStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
