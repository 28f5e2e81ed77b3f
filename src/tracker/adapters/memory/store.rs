//! In-memory tracker store for tests and embedded use.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::tracker::{
    domain::{NewProject, NewTask, Project, ProjectId, ProjectName, Task, TaskId, TaskTitle},
    ports::{ProjectRepository, RepositoryError, RepositoryResult, TaskRepository},
};

/// Thread-safe in-memory store implementing both tracker repositories.
///
/// Projects and tasks share one state so that the storage rules a real
/// database would enforce hold here too: unique project names, the
/// task-to-project foreign key, and cascade deletion. Identifiers count up
/// from 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrackerStore {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    projects: BTreeMap<ProjectId, Project>,
    tasks: BTreeMap<TaskId, Task>,
    last_project_id: i64,
    last_task_id: i64,
}

impl InMemoryTrackerState {
    fn name_taken_by_other(&self, name: &ProjectName, id: Option<ProjectId>) -> bool {
        self.projects
            .values()
            .any(|project| project.name() == name && Some(project.id()) != id)
    }
}

impl InMemoryTrackerStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, InMemoryTrackerState>> {
        self.state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, InMemoryTrackerState>> {
        self.state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryTrackerStore {
    async fn add(&self, project: &NewProject) -> RepositoryResult<Project> {
        let mut state = self.write()?;
        if state.name_taken_by_other(project.name(), None) {
            return Err(RepositoryError::DuplicateProjectName(
                project.name().clone(),
            ));
        }

        state.last_project_id += 1;
        let stored = project
            .clone()
            .into_project(ProjectId::new(state.last_project_id));
        state.projects.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &ProjectName) -> RepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state
            .projects
            .values()
            .find(|project| project.name() == name)
            .cloned())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        let state = self.read()?;
        Ok(state.projects.values().cloned().collect())
    }

    async fn update(&self, project: &Project) -> RepositoryResult<Project> {
        let mut state = self.write()?;
        if !state.projects.contains_key(&project.id()) {
            return Err(RepositoryError::ProjectNotFound(project.id()));
        }
        if state.name_taken_by_other(project.name(), Some(project.id())) {
            return Err(RepositoryError::DuplicateProjectName(
                project.name().clone(),
            ));
        }

        state.projects.insert(project.id(), project.clone());
        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if state.projects.remove(&id).is_some() {
            state.tasks.retain(|_, task| task.project_id() != id);
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTrackerStore {
    async fn add(&self, task: &NewTask) -> RepositoryResult<Task> {
        let mut state = self.write()?;
        if !state.projects.contains_key(&task.project_id()) {
            return Err(RepositoryError::UnknownProject(task.project_id()));
        }

        state.last_task_id += 1;
        let stored = task.clone().into_task(TaskId::new(state.last_task_id));
        state.tasks.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &TaskTitle) -> RepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .find(|task| task.title() == title)
            .cloned())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn list_for_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn update(&self, task: &Task) -> RepositoryResult<Task> {
        let mut state = self.write()?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(RepositoryError::TaskNotFound(task.id()));
        }
        if !state.projects.contains_key(&task.project_id()) {
            return Err(RepositoryError::UnknownProject(task.project_id()));
        }

        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let mut state = self.write()?;
        state.tasks.remove(&id);
        Ok(())
    }
}
