//! Environment-driven settings for the tracker binary.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file by the binary. Parsing is separated from the environment
//! itself so it can be tested with plain maps.

use crate::tracker::services::CapacityLimits;
use thiserror::Error;

/// Connection string for the `PostgreSQL` database.
pub const DATABASE_URL_KEY: &str = "DATABASE_URL";

/// Override for [`CapacityLimits::max_projects`].
pub const MAX_PROJECTS_KEY: &str = "TASKLANE_MAX_PROJECTS";

/// Override for [`CapacityLimits::max_tasks_per_project`].
pub const MAX_TASKS_PER_PROJECT_KEY: &str = "TASKLANE_MAX_TASKS_PER_PROJECT";

/// Errors raised while reading settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required key is unset or blank.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A limit value is not a positive integer.
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidLimit {
        /// The offending key.
        key: &'static str,
        /// The raw value supplied.
        value: String,
    },
}

/// Resolved runtime settings.
///
/// # Examples
///
/// ```
/// use tasklane::config::Settings;
///
/// let settings = Settings::from_lookup(|key| match key {
///     "DATABASE_URL" => Some("postgres://localhost/tasklane".to_owned()),
///     "TASKLANE_MAX_PROJECTS" => Some("3".to_owned()),
///     _ => None,
/// })
/// .expect("settings should parse");
///
/// assert_eq!(settings.limits.max_projects, 3);
/// assert_eq!(settings.limits.max_tasks_per_project, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Database connection string.
    pub database_url: String,
    /// Capacity limits handed to the services.
    pub limits: CapacityLimits,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a limit
    /// override is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a limit
    /// override is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_KEY)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_KEY))?;

        let defaults = CapacityLimits::default();
        let limits = CapacityLimits::new(
            parse_limit(MAX_PROJECTS_KEY, lookup(MAX_PROJECTS_KEY), defaults.max_projects)?,
            parse_limit(
                MAX_TASKS_PER_PROJECT_KEY,
                lookup(MAX_TASKS_PER_PROJECT_KEY),
                defaults.max_tasks_per_project,
            )?,
        );

        Ok(Self {
            database_url,
            limits,
        })
    }
}

fn parse_limit(
    key: &'static str,
    raw: Option<String>,
    default: usize,
) -> Result<usize, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidLimit { key, value }),
    }
}
