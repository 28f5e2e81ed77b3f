//! Validated project name and task title types.

use super::TrackerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a project name, matching the `VARCHAR(100)` column.
const MAX_PROJECT_NAME_LENGTH: usize = 100;

/// Maximum length for a task title, matching the `VARCHAR(150)` column.
const MAX_TASK_TITLE_LENGTH: usize = 150;

/// Validated project name.
///
/// Names are compared exactly: no trimming or case folding is applied to
/// the stored value, so `"Alpha"` and `"alpha"` are distinct projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyProjectName`] when the value is
    /// blank, or [`TrackerDomainError::ProjectNameTooLong`] when it exceeds
    /// 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TrackerDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TrackerDomainError::EmptyProjectName);
        }
        if raw.chars().count() > MAX_PROJECT_NAME_LENGTH {
            return Err(TrackerDomainError::ProjectNameTooLong {
                name: raw,
                limit: MAX_PROJECT_NAME_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ProjectName {
    type Error = TrackerDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated task title. Titles are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyTaskTitle`] when the value is
    /// blank, or [`TrackerDomainError::TaskTitleTooLong`] when it exceeds 150
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TrackerDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TrackerDomainError::EmptyTaskTitle);
        }
        if raw.chars().count() > MAX_TASK_TITLE_LENGTH {
            return Err(TrackerDomainError::TaskTitleTooLong {
                title: raw,
                limit: MAX_TASK_TITLE_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TrackerDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
