//! Statistics tests

use roster_core::{Roster, RosterError, summarize};

use crate::common::{approx_eq, bob_and_ann};

#[test]
fn two_student_scenario() {
    let stats = bob_and_ann().stats().unwrap();
    assert_eq!(stats.total, 2);
    assert!(approx_eq(stats.average_age, 21.0));
    assert!(approx_eq(stats.average_gpa, 3.5));
    assert_eq!(stats.active_count, 1);
    assert!(approx_eq(stats.active_percent, 50.0));
    assert_eq!(stats.top_student.name().as_str(), "Bob");
}

#[test]
fn top_student_tie_goes_to_first() {
    let mut roster = Roster::new();
    roster.add("X", 20, 4.0, true).unwrap();
    roster.add("Y", 21, 4.0, false).unwrap();
    let stats = roster.stats().unwrap();
    assert_eq!(stats.top_student.name().as_str(), "X");
}

#[test]
fn empty_roster_signals_empty_dataset() {
    let roster = Roster::new();
    let err = roster.stats().unwrap_err();
    assert_eq!(err, RosterError::EmptyDataset);
    assert!(summarize(roster.list()).is_err());
}

#[test]
fn stats_reflect_current_snapshot_only() {
    let mut roster = bob_and_ann();
    roster.clear();
    assert_eq!(roster.stats().unwrap_err(), RosterError::EmptyDataset);

    roster.add("Cy", 40, 2.0, true).unwrap();
    let stats = roster.stats().unwrap();
    assert_eq!(stats.total, 1);
    assert!(approx_eq(stats.average_age, 40.0));
    assert!(approx_eq(stats.active_percent, 100.0));
}

#[test]
fn top_student_display() {
    let stats = bob_and_ann().stats().unwrap();
    insta::assert_snapshot!(
        stats.top_student.to_string(),
        @"Bob (age 20, GPA 3.80, grade A, active)"
    );
}
