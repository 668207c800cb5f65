//! Name lookup over a registry snapshot.

use roster_types::Student;

/// First record whose name equals `query` ignoring case, in insertion order.
#[must_use]
pub fn find_by_name<'a>(students: &'a [Student], query: &str) -> Option<&'a Student> {
    students.iter().find(|student| student.name().matches(query))
}
