//! Ordered in-memory store of student records.

use std::slice;

use roster_types::Student;

/// Insertion-ordered student records plus a lifetime insertion counter.
///
/// Duplicates (identical names included) are allowed. `total_added` counts
/// every successful `add` since construction and is not reset by `clear`,
/// so it can diverge from `count`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    students: Vec<Student>,
    total_added: u64,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `student` to the end of the sequence.
    pub fn add(&mut self, student: Student) -> &Student {
        self.total_added = self.total_added.saturating_add(1);
        tracing::debug!(
            name = %student.name(),
            count = self.students.len() + 1,
            total_added = self.total_added,
            "Student added"
        );
        self.students.push(student);
        &self.students[self.students.len() - 1]
    }

    /// Read-only snapshot in insertion order.
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Student] {
        &self.students
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.students.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn total_added(&self) -> u64 {
        self.total_added
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn clear(&mut self) {
        if self.students.is_empty() {
            return;
        }
        tracing::debug!(removed = self.students.len(), "Registry cleared");
        self.students.clear();
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Student;
    type IntoIter = slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
