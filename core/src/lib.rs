//! Core roster logic.
//!
//! This crate owns the in-memory student registry and the pure queries run
//! against it: name lookup and aggregate statistics. [`Roster`] ties them
//! together behind the caller-facing add/list/search/stats/clear API.
//!
//! Everything is synchronous and single-owner. Callers that need shared
//! access wrap the `Roster` in their own lock.

pub mod registry;
mod roster;
pub mod search;
pub mod stats;

pub use registry::Registry;
pub use roster::{Roster, RosterError};
pub use search::find_by_name;
pub use stats::{Stats, StatsError, summarize};

pub use roster_types::{
    Age, AgePolicy, Gpa, GpaStanding, Grade, Student, StudentName, ValidationError,
};
