//! Execution of tracker commands against the services.

use crate::{
    cli::{ProjectCommand, TaskCommand, TrackerCommand},
    error::CliError,
    render,
};
use mockable::Clock;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tasklane::tracker::{
    domain::{ProjectId, TaskId},
    ports::{ProjectRepository, TaskRepository},
    services::{
        AddTaskRequest, CapacityLimits, CreateProjectRequest, ProjectService, TaskService,
        UpdateProjectRequest,
    },
};

/// Project and task services sharing one store.
pub struct Tracker<S, C>
where
    S: ProjectRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    projects: ProjectService<S, C>,
    tasks: TaskService<S, S, C>,
}

impl<S, C> Tracker<S, C>
where
    S: ProjectRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wires both services to `store`.
    pub fn new(store: Arc<S>, clock: Arc<C>, limits: CapacityLimits) -> Self {
        Self {
            projects: ProjectService::new(Arc::clone(&store), Arc::clone(&clock), limits),
            tasks: TaskService::new(Arc::clone(&store), store, clock, limits),
        }
    }

    /// Runs `command`, writing its report to `out`.
    pub async fn execute(&self, command: TrackerCommand, out: &mut impl Write) -> Result<(), CliError> {
        match command {
            TrackerCommand::Project(project_command) => self.project(project_command, out).await,
            TrackerCommand::Task(task_command) => self.task(task_command, out).await,
        }
    }

    async fn project(&self, command: ProjectCommand, out: &mut impl Write) -> Result<(), CliError> {
        match command {
            ProjectCommand::Create(args) => {
                let mut request = CreateProjectRequest::new(args.name);
                if let Some(description) = args.description {
                    request = request.with_description(description);
                }
                let project = self.projects.create_project(request).await?;
                writeln!(out, "Created project {}: {}", project.id(), project.name())?;
            }
            ProjectCommand::List(args) => {
                let projects = self.projects.get_all_projects().await?;
                if args.json {
                    write_json(out, &projects)?;
                } else {
                    out.write_all(render::project_table(&projects).as_bytes())?;
                }
            }
            ProjectCommand::Rename(args) => {
                let mut request = UpdateProjectRequest::new(ProjectId::new(args.id), args.name);
                if let Some(description) = args.description {
                    request = request.with_description(description);
                }
                let project = self.projects.update_project(request).await?;
                writeln!(out, "Updated project {}: {}", project.id(), project.name())?;
            }
            ProjectCommand::Delete(args) => {
                let id = ProjectId::new(args.id);
                self.projects.delete_project_by_id(id).await?;
                writeln!(out, "Deleted project {id}")?;
            }
        }
        Ok(())
    }

    async fn task(&self, command: TaskCommand, out: &mut impl Write) -> Result<(), CliError> {
        match command {
            TaskCommand::Create(args) => {
                let mut request = AddTaskRequest::new(ProjectId::new(args.project_id), args.title);
                if let Some(description) = args.description {
                    request = request.with_description(description);
                }
                if let Some(deadline) = args.deadline {
                    request = request.with_deadline(deadline);
                }
                let task = self.tasks.add_task_to_project(request).await?;
                writeln!(
                    out,
                    "Created task {} in project {}: {}",
                    task.id(),
                    task.project_id(),
                    task.title()
                )?;
            }
            TaskCommand::List(args) => {
                let project = self
                    .projects
                    .get_project_by_id(ProjectId::new(args.project_id))
                    .await?;
                let tasks = self.tasks.list_tasks_for_project(project.id()).await?;
                if args.json {
                    write_json(out, &tasks)?;
                } else {
                    out.write_all(render::task_table(&project, &tasks).as_bytes())?;
                }
            }
            TaskCommand::Status(args) => {
                let task = self
                    .tasks
                    .change_task_status(TaskId::new(args.id), args.status)
                    .await?;
                writeln!(out, "Task {} is now {}", task.id(), task.status())?;
            }
        }
        Ok(())
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
