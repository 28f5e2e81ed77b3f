//! Service layer for task creation, lookup, and status changes.

use super::{CapacityLimits, EntityKind, TrackerError, TrackerResult};
use crate::tracker::{
    domain::{
        Description, NewTask, NewTaskParams, Project, ProjectId, Task, TaskId, TaskStatus,
        TaskTitle,
    },
    ports::{ProjectRepository, TaskRepository},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for adding a task to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    deadline: Option<DateTime<Utc>>,
}

impl AddTaskRequest {
    /// Creates a request with the owning project and task title.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            deadline: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Task orchestration service.
///
/// Needs read access to projects for existence checks and the task cap.
#[derive(Clone)]
pub struct TaskService<T, P, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    clock: Arc<C>,
    limits: CapacityLimits,
}

impl<T, P, C> TaskService<T, P, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        projects: Arc<P>,
        clock: Arc<C>,
        limits: CapacityLimits,
    ) -> Self {
        Self {
            tasks,
            projects,
            clock,
            limits,
        }
    }

    /// Adds a new `todo` task to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Domain`] for an invalid title or
    /// description, [`TrackerError::NotFound`] when the project is absent,
    /// [`TrackerError::CapacityExceeded`] when the project already holds
    /// `max_tasks_per_project` tasks, or [`TrackerError::Repository`] when
    /// persistence fails.
    pub async fn add_task_to_project(&self, request: AddTaskRequest) -> TrackerResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = Description::optional(request.description)?;

        let project = self.require_project(request.project_id).await?;
        let current = self.tasks.list_for_project(project.id()).await?;
        if current.len() >= self.limits.max_tasks_per_project {
            debug!(
                project_id = %project.id(),
                limit = self.limits.max_tasks_per_project,
                "task cap reached, rejecting create"
            );
            return Err(TrackerError::CapacityExceeded {
                kind: EntityKind::Task,
                limit: self.limits.max_tasks_per_project,
                project: Some(project.name().as_str().to_owned()),
            });
        }

        let draft = NewTask::new(
            NewTaskParams {
                project_id: project.id(),
                title,
                description,
                deadline: request.deadline,
            },
            &*self.clock,
        );
        let task = self.tasks.add(&draft).await?;
        info!(
            task_id = %task.id(),
            project_id = %task.project_id(),
            title = %task.title(),
            "task created"
        );
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when no task has this identifier,
    /// or [`TrackerError::Repository`] when lookup fails.
    pub async fn get_task_by_id(&self, id: TaskId) -> TrackerResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| TrackerError::not_found_by_id(EntityKind::Task, id.value()))
    }

    /// Retrieves the first task carrying `title`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when no task has this title, or
    /// [`TrackerError::Repository`] when lookup fails.
    pub async fn get_task_by_title(&self, title: &str) -> TrackerResult<Task> {
        let Ok(task_title) = TaskTitle::new(title) else {
            return Err(TrackerError::not_found_by_name(EntityKind::Task, title));
        };
        self.tasks
            .find_by_title(&task_title)
            .await?
            .ok_or_else(|| TrackerError::not_found_by_name(EntityKind::Task, title))
    }

    /// Moves a task to `status`, maintaining the closing timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the task is absent, or
    /// [`TrackerError::Repository`] when persistence fails.
    pub async fn change_task_status(&self, id: TaskId, status: TaskStatus) -> TrackerResult<Task> {
        let mut task = self.get_task_by_id(id).await?;
        let previous = task.status();
        task.change_status(status, &*self.clock);
        let updated = self.tasks.update(&task).await?;
        info!(
            task_id = %updated.id(),
            from = %previous,
            to = %updated.status(),
            "task status changed"
        );
        Ok(updated)
    }

    /// Lists the tasks of an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the project is absent, or
    /// [`TrackerError::Repository`] when lookup fails.
    pub async fn list_tasks_for_project(&self, project_id: ProjectId) -> TrackerResult<Vec<Task>> {
        let project = self.require_project(project_id).await?;
        Ok(self.tasks.list_for_project(project.id()).await?)
    }

    async fn require_project(&self, id: ProjectId) -> TrackerResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| TrackerError::not_found_by_id(EntityKind::Project, id.value()))
    }
}
