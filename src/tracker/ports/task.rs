//! Repository port for task persistence and lookup.

use super::RepositoryResult;
use crate::tracker::domain::{NewTask, ProjectId, Task, TaskId, TaskTitle};
use async_trait::async_trait;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UnknownProject`] when the owning project
    /// does not exist.
    ///
    /// [`RepositoryError::UnknownProject`]: super::RepositoryError::UnknownProject
    async fn add(&self, task: &NewTask) -> RepositoryResult<Task>;

    /// Finds a task by identifier.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Finds the first task with the given title.
    ///
    /// Titles are not unique; which duplicate is returned is unspecified.
    async fn find_by_title(&self, title: &TaskTitle) -> RepositoryResult<Option<Task>>;

    /// Returns every stored task.
    async fn list_all(&self) -> RepositoryResult<Vec<Task>>;

    /// Returns the tasks owned by one project.
    async fn list_for_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>>;

    /// Persists the current field values of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when the task does not exist.
    ///
    /// [`RepositoryError::TaskNotFound`]: super::RepositoryError::TaskNotFound
    async fn update(&self, task: &Task) -> RepositoryResult<Task>;

    /// Removes a task. Deleting an absent task is a no-op.
    async fn delete(&self, id: TaskId) -> RepositoryResult<()>;
}
