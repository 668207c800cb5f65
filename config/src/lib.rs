//! Configuration loading for the student roster.
//!
//! ```toml
//! [roster]
//! school = "Northside Academy"
//!
//! [validation]
//! min_age = 16
//! max_age = 100
//! ```
//!
//! Raw TOML structs (all `Option` fields) stay private. They are resolved
//! into [`RosterConfig`] at the parse boundary, so a `RosterConfig` value
//! always carries a valid [`AgePolicy`].

use std::fs;
use std::path::{Path, PathBuf};

use roster_types::{AgePolicy, ValidationError};
use serde::Deserialize;
use thiserror::Error;

/// Institution name used when the config does not set one.
pub const DEFAULT_SCHOOL: &str = "Java Academy";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    roster: Option<RawRosterSection>,
    validation: Option<RawValidationSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRosterSection {
    school: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawValidationSection {
    min_age: Option<u32>,
    max_age: Option<u32>,
}

/// Resolved roster configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    school: String,
    age_policy: AgePolicy,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            school: DEFAULT_SCHOOL.to_string(),
            age_policy: AgePolicy::DEFAULT,
        }
    }
}

impl TryFrom<RawConfig> for RosterConfig {
    type Error = ValidationError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let school = raw
            .roster
            .and_then(|section| section.school)
            .map(|school| school.trim().to_string())
            .filter(|school| !school.is_empty())
            .unwrap_or_else(|| DEFAULT_SCHOOL.to_string());

        let validation = raw.validation.unwrap_or_default();
        let age_policy = AgePolicy::new(
            validation.min_age.unwrap_or(AgePolicy::DEFAULT.min()),
            validation.max_age.unwrap_or(AgePolicy::DEFAULT.max()),
        )?;

        Ok(Self { school, age_policy })
    }
}

impl RosterConfig {
    /// Load from the default location.
    ///
    /// A missing file yields `None`. Read and parse failures are logged and
    /// also yield `None`, so callers fall back to defaults.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded roster config");
                Some(config)
            }
            Err(err) => {
                tracing::warn!("Failed to load config at {}: {err}", path.display());
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self::try_from(raw)?)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn school(&self) -> &str {
        &self.school
    }

    #[must_use]
    pub fn age_policy(&self) -> AgePolicy {
        self.age_policy
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".roster").join("config.toml"))
}
