//! Repository port for project persistence and lookup.

use super::RepositoryResult;
use crate::tracker::domain::{NewProject, Project, ProjectId, ProjectName};
use async_trait::async_trait;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateProjectName`] when storage
    /// enforces name uniqueness and the name is taken.
    ///
    /// [`RepositoryError::DuplicateProjectName`]: super::RepositoryError::DuplicateProjectName
    async fn add(&self, project: &NewProject) -> RepositoryResult<Project>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;

    /// Finds a project by exact name.
    ///
    /// Returns `None` when no project has the name.
    async fn find_by_name(&self, name: &ProjectName) -> RepositoryResult<Option<Project>>;

    /// Returns every stored project.
    async fn list_all(&self) -> RepositoryResult<Vec<Project>>;

    /// Persists the current field values of an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ProjectNotFound`] when the project does not
    /// exist.
    ///
    /// [`RepositoryError::ProjectNotFound`]: super::RepositoryError::ProjectNotFound
    async fn update(&self, project: &Project) -> RepositoryResult<Project>;

    /// Removes a project and, by cascade, all of its tasks.
    ///
    /// Deleting an absent project is a no-op.
    async fn delete(&self, id: ProjectId) -> RepositoryResult<()>;
}
