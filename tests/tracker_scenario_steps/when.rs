//! When steps for tracker behaviour scenarios.

use super::world::{TrackerWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklane::tracker::{
    domain::{ProjectId, TaskId, TaskStatus},
    services::{AddTaskRequest, CreateProjectRequest},
};

#[when(r#"project "{name}" is created with an empty description"#)]
fn create_project(world: &mut TrackerWorld, name: String) {
    let request = CreateProjectRequest::new(name).with_description("");
    let result = run_async(world.projects.create_project(request));
    world.record_project(result);
}

#[when(r#"task "{title}" is added to project {project_id:i64}"#)]
fn add_task(world: &mut TrackerWorld, title: String, project_id: i64) {
    let request = AddTaskRequest::new(ProjectId::new(project_id), title);
    let result = run_async(world.tasks.add_task_to_project(request));
    world.record_task(result);
}

fn change_status(world: &mut TrackerWorld, task_id: i64, status: &str) -> Result<(), eyre::Report> {
    let target: TaskStatus = status.parse().wrap_err("parse scenario status")?;
    let result = run_async(world.tasks.change_task_status(TaskId::new(task_id), target));
    world.record_task(result);
    Ok(())
}

#[when(r#"task {task_id:i64} is moved to "{status}""#)]
fn move_task(world: &mut TrackerWorld, task_id: i64, status: String) -> Result<(), eyre::Report> {
    change_status(world, task_id, &status)
}

#[when(r#"task {task_id:i64} is moved to "{status}" again"#)]
fn move_task_again(
    world: &mut TrackerWorld,
    task_id: i64,
    status: String,
) -> Result<(), eyre::Report> {
    world.previous_closed_at = world.require_task()?.closed_at();
    change_status(world, task_id, &status)
}

#[when("project {project_id:i64} is deleted")]
fn delete_project(world: &mut TrackerWorld, project_id: i64) -> Result<(), eyre::Report> {
    run_async(world.projects.delete_project_by_id(ProjectId::new(project_id)))
        .wrap_err("delete project")?;
    Ok(())
}
