//! Free-form description shared by projects and tasks.

use super::TrackerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a description, matching the `VARCHAR(500)` columns.
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Length-checked description text. An empty description is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Description(String);

impl Description {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::DescriptionTooLong`] when the value
    /// exceeds 500 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TrackerDomainError> {
        let raw = value.into();
        if raw.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(TrackerDomainError::DescriptionTooLong {
                limit: MAX_DESCRIPTION_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    /// Validates an optional description.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::DescriptionTooLong`] when a present
    /// value exceeds 500 characters.
    pub fn optional(value: Option<String>) -> Result<Option<Self>, TrackerDomainError> {
        value.map(Self::new).transpose()
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for Description {
    type Error = TrackerDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
