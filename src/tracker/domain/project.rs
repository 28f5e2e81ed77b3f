//! Project aggregate and its unsaved draft.

use super::{Description, ProjectId, ProjectName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// A project that has been validated but not yet persisted.
///
/// Repositories turn a draft into a [`Project`] by assigning an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    name: ProjectName,
    description: Option<Description>,
    created_at: DateTime<Utc>,
}

impl NewProject {
    /// Creates a project draft stamped with the current clock time.
    #[must_use]
    pub fn new(name: ProjectName, description: Option<Description>, clock: &impl Clock) -> Self {
        Self {
            name,
            description,
            created_at: clock.utc(),
        }
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Binds the draft to a storage-assigned identifier.
    #[must_use]
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Option<Description>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted unique name.
    pub name: ProjectName,
    /// Persisted description, if any.
    pub description: Option<Description>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Overwrites the name and description. Identity and creation time are
    /// untouched.
    pub fn revise(&mut self, name: ProjectName, description: Option<Description>) {
        self.name = name;
        self.description = description;
    }
}
