//! Aggregate statistics over a registry snapshot.

use roster_types::Student;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no students available for statistics")]
    EmptyDataset,
}

/// Summary of a non-empty snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Number of records summarized. Always at least one.
    pub total: usize,
    pub average_age: f64,
    pub average_gpa: f64,
    pub active_count: usize,
    /// `active_count / total * 100`.
    pub active_percent: f64,
    /// First record holding the maximum GPA.
    pub top_student: Student,
}

/// Single pass over `students`.
///
/// The top student is replaced only on a strictly greater GPA, so ties go to
/// the earliest record.
pub fn summarize(students: &[Student]) -> Result<Stats, StatsError> {
    let (first, rest) = students.split_first().ok_or(StatsError::EmptyDataset)?;

    let mut total_age = u64::from(first.age().value());
    let mut total_gpa = first.gpa().value();
    let mut active_count = usize::from(first.is_active());
    let mut top = first;

    for student in rest {
        total_age += u64::from(student.age().value());
        total_gpa += student.gpa().value();
        if student.is_active() {
            active_count += 1;
        }
        if student.gpa().value() > top.gpa().value() {
            top = student;
        }
    }

    let total = students.len();
    let divisor = total as f64;
    Ok(Stats {
        total,
        average_age: total_age as f64 / divisor,
        average_gpa: total_gpa / divisor,
        active_count,
        active_percent: active_count as f64 / divisor * 100.0,
        top_student: top.clone(),
    })
}
