//! Service layer for project creation, lookup, revision, and removal.

use super::{CapacityLimits, EntityKind, TrackerError, TrackerResult};
use crate::tracker::{
    domain::{Description, NewProject, Project, ProjectId, ProjectName},
    ports::ProjectRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for overwriting a project's name and description.
///
/// The description is replaced wholesale: a request without one clears the
/// stored description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    id: ProjectId,
    name: String,
    description: Option<String>,
}

impl UpdateProjectRequest {
    /// Creates a request targeting `id` with the new name.
    #[must_use]
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    /// Sets the new project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Project orchestration service.
#[derive(Clone)]
pub struct ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    limits: CapacityLimits,
}

impl<R, C> ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, limits: CapacityLimits) -> Self {
        Self {
            repository,
            clock,
            limits,
        }
    }

    /// Creates a project after checking the project cap and name
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Domain`] for an invalid name or description,
    /// [`TrackerError::CapacityExceeded`] when the store already holds
    /// `max_projects` projects, [`TrackerError::DuplicateName`] when the
    /// name is taken, or [`TrackerError::Repository`] when persistence
    /// fails.
    pub async fn create_project(&self, request: CreateProjectRequest) -> TrackerResult<Project> {
        let name = ProjectName::new(request.name)?;
        let description = Description::optional(request.description)?;

        let existing = self.repository.list_all().await?;
        if existing.len() >= self.limits.max_projects {
            debug!(
                limit = self.limits.max_projects,
                "project cap reached, rejecting create"
            );
            return Err(TrackerError::CapacityExceeded {
                kind: EntityKind::Project,
                limit: self.limits.max_projects,
                project: None,
            });
        }

        if self.repository.find_by_name(&name).await?.is_some() {
            return Err(TrackerError::DuplicateName(name.as_str().to_owned()));
        }

        let draft = NewProject::new(name, description, &*self.clock);
        let project = self.repository.add(&draft).await?;
        info!(project_id = %project.id(), name = %project.name(), "project created");
        Ok(project)
    }

    /// Retrieves a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when no project has this
    /// identifier, or [`TrackerError::Repository`] when lookup fails.
    pub async fn get_project_by_id(&self, id: ProjectId) -> TrackerResult<Project> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TrackerError::not_found_by_id(EntityKind::Project, id.value()))
    }

    /// Retrieves a project by its exact name.
    ///
    /// A name that fails validation cannot be stored, so it is reported as
    /// not found.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when no project has this name, or
    /// [`TrackerError::Repository`] when lookup fails.
    pub async fn get_project_by_name(&self, name: &str) -> TrackerResult<Project> {
        let Ok(project_name) = ProjectName::new(name) else {
            return Err(TrackerError::not_found_by_name(EntityKind::Project, name));
        };
        self.repository
            .find_by_name(&project_name)
            .await?
            .ok_or_else(|| TrackerError::not_found_by_name(EntityKind::Project, name))
    }

    /// Lists every stored project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Repository`] when lookup fails.
    pub async fn get_all_projects(&self) -> TrackerResult<Vec<Project>> {
        Ok(self.repository.list_all().await?)
    }

    /// Overwrites a project's name and description.
    ///
    /// Uniqueness is only re-checked when the name actually changes.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the project is absent,
    /// [`TrackerError::Domain`] for an invalid name or description,
    /// [`TrackerError::DuplicateName`] when another project holds the new
    /// name, or [`TrackerError::Repository`] when persistence fails.
    pub async fn update_project(&self, request: UpdateProjectRequest) -> TrackerResult<Project> {
        let mut project = self.get_project_by_id(request.id).await?;
        let name = ProjectName::new(request.name)?;
        let description = Description::optional(request.description)?;

        if name != *project.name() && self.repository.find_by_name(&name).await?.is_some() {
            return Err(TrackerError::DuplicateName(name.as_str().to_owned()));
        }

        project.revise(name, description);
        let updated = self.repository.update(&project).await?;
        info!(project_id = %updated.id(), name = %updated.name(), "project updated");
        Ok(updated)
    }

    /// Deletes a project together with all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the project is absent, or
    /// [`TrackerError::Repository`] when persistence fails.
    pub async fn delete_project_by_id(&self, id: ProjectId) -> TrackerResult<()> {
        let project = self.get_project_by_id(id).await?;
        self.repository.delete(project.id()).await?;
        info!(project_id = %id, name = %project.name(), "project deleted");
        Ok(())
    }
}
