//! Caller-visible errors for tracker service operations.

use crate::tracker::{
    domain::TrackerDomainError,
    ports::RepositoryError,
};
use std::fmt;
use thiserror::Error;

/// Kind of entity named by an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A project.
    Project,
    /// A task.
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Project => "Project",
            Self::Task => "Task",
        })
    }
}

/// The key a failed lookup was made with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Lookup by storage identifier.
    Id(i64),
    /// Lookup by project name or task title.
    Name(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Errors returned by project and task services.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A lookup by id, name, or title found nothing.
    #[error("{kind} with identifier '{identifier}' not found.")]
    NotFound {
        /// Kind of entity looked up.
        kind: EntityKind,
        /// Key used for the lookup.
        identifier: Identifier,
    },

    /// A project name is already taken.
    #[error("A project with the name '{0}' already exists.")]
    DuplicateName(String),

    /// The global project cap or a per-project task cap is reached.
    #[error("{}", capacity_message(.kind, .limit, .project))]
    CapacityExceeded {
        /// Kind of entity that could not be created.
        kind: EntityKind,
        /// The limit that was reached.
        limit: usize,
        /// Name of the project whose task cap was reached.
        project: Option<String>,
    },

    /// Field validation failed.
    #[error(transparent)]
    Domain(#[from] TrackerDomainError),

    /// The persistence adapter failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl TrackerError {
    /// Builds a [`TrackerError::NotFound`] for an identifier lookup.
    #[must_use]
    pub const fn not_found_by_id(kind: EntityKind, id: i64) -> Self {
        Self::NotFound {
            kind,
            identifier: Identifier::Id(id),
        }
    }

    /// Builds a [`TrackerError::NotFound`] for a name or title lookup.
    #[must_use]
    pub fn not_found_by_name(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            identifier: Identifier::Name(name.into()),
        }
    }
}

/// Storage-level constraint violations carry the same meaning as the
/// service-level checks, so they surface as the same errors.
impl From<RepositoryError> for TrackerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateProjectName(name) => {
                Self::DuplicateName(name.as_str().to_owned())
            }
            RepositoryError::ProjectNotFound(id) | RepositoryError::UnknownProject(id) => {
                Self::not_found_by_id(EntityKind::Project, id.value())
            }
            RepositoryError::TaskNotFound(id) => {
                Self::not_found_by_id(EntityKind::Task, id.value())
            }
            other => Self::Repository(other),
        }
    }
}

/// Result type for tracker service operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

fn capacity_message(kind: &EntityKind, limit: &usize, project: &Option<String>) -> String {
    match (kind, project) {
        (EntityKind::Task, Some(name)) => format!(
            "Cannot add new task to '{name}'. The maximum limit of {limit} tasks has been reached."
        ),
        (EntityKind::Task, None) => format!(
            "Cannot add new task. The maximum limit of {limit} tasks has been reached."
        ),
        (EntityKind::Project, _) => format!(
            "Cannot create new project. The maximum limit of {limit} projects has been reached."
        ),
    }
}
