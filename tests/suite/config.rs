//! Config-driven roster tests

use std::fs;

use roster_config::{ConfigError, RosterConfig};
use roster_core::{Roster, RosterError, ValidationError};

#[test]
fn roster_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[roster]\nschool = \"Riverside\"\n\n[validation]\nmin_age = 18\nmax_age = 30\n",
    )
    .unwrap();

    let config = RosterConfig::load_from(&path).unwrap();
    let mut roster = Roster::from_config(&config);
    assert_eq!(roster.school(), "Riverside");

    assert!(roster.add("Ok", 30, 3.0, true).is_ok());
    assert_eq!(
        roster.add("Late", 31, 3.0, true).unwrap_err(),
        RosterError::Validation(ValidationError::AgeOutOfRange {
            age: 31,
            min: 18,
            max: 30
        })
    );
}

#[test]
fn malformed_config_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[validation\nmin_age = ").unwrap();
    assert!(matches!(
        RosterConfig::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn default_roster_matches_default_config() {
    let from_config = Roster::from_config(&RosterConfig::default());
    let plain = Roster::new();
    assert_eq!(from_config.school(), plain.school());
    assert_eq!(from_config.age_policy(), plain.age_policy());
    assert_eq!(plain.school(), "Java Academy");
}
