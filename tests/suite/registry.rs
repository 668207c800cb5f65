//! Registry lifecycle tests

use roster_core::{Roster, RosterError, ValidationError};

use crate::common::{bob_and_ann, names};

#[test]
fn list_preserves_insertion_order() {
    let mut roster = Roster::new();
    let inserted = ["Zed", "Amy", "Moe", "Amy", "Lee"];
    for (i, name) in inserted.iter().enumerate() {
        roster.add(*name, 18 + i as i64, 3.0, i % 2 == 0).unwrap();
    }
    assert_eq!(names(&roster), inserted);
}

#[test]
fn empty_list_is_not_an_error() {
    let roster = Roster::new();
    assert!(roster.list().is_empty());
    assert_eq!(roster.count(), 0);
}

#[test]
fn count_tracks_successful_adds_since_clear() {
    let mut roster = bob_and_ann();
    assert_eq!(roster.count(), 2);

    assert!(roster.add("", 20, 3.0, true).is_err());
    assert!(roster.add("Old", 120, 3.0, true).is_err());
    assert_eq!(roster.count(), 2);

    roster.clear();
    assert_eq!(roster.count(), 0);
    assert!(roster.list().is_empty());

    roster.add("Cy", 19, 2.1, true).unwrap();
    assert_eq!(roster.count(), 1);
}

#[test]
fn lifetime_total_survives_clear() {
    let mut roster = bob_and_ann();
    roster.clear();
    roster.add("Cy", 19, 2.1, true).unwrap();
    assert_eq!(roster.count(), 1);
    assert_eq!(roster.total_added(), 3);
}

#[test]
fn rejected_add_reports_validation_error() {
    let mut roster = Roster::new();
    let err = roster.add("Tim", 12, 3.0, true).unwrap_err();
    assert_eq!(
        err,
        RosterError::Validation(ValidationError::AgeOutOfRange {
            age: 12,
            min: 16,
            max: 100
        })
    );
    insta::assert_snapshot!(err.to_string(), @"age 12 is outside the accepted range 16-100");
}

#[test]
fn records_are_exported_as_json() {
    let roster = bob_and_ann();
    let json = serde_json::to_value(roster.list()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "Bob", "age": 20, "gpa": 3.8, "active": true },
            { "name": "Ann", "age": 22, "gpa": 3.2, "active": false }
        ])
    );
}
