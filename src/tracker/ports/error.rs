//! Errors shared by tracker repository implementations.

use crate::tracker::domain::{ProjectId, ProjectName, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors returned by project and task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// An update targeted a project that is not stored.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// An update targeted a task that is not stored.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The storage uniqueness constraint on project names was violated.
    #[error("duplicate project name: {0}")]
    DuplicateProjectName(ProjectName),

    /// A task referenced a project that does not exist.
    #[error("unknown project: {0}")]
    UnknownProject(ProjectId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
