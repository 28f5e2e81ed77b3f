//! Given steps for tracker behaviour scenarios.

use super::world::{TrackerWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklane::tracker::{
    domain::ProjectId,
    services::{AddTaskRequest, CreateProjectRequest},
};

#[given("an empty tracker")]
fn empty_tracker(world: &mut TrackerWorld) -> Result<(), eyre::Report> {
    let projects = run_async(world.projects.get_all_projects()).wrap_err("list projects")?;
    if !projects.is_empty() {
        return Err(eyre::eyre!("expected no projects, found {}", projects.len()));
    }
    Ok(())
}

#[given(r#"project "{name}" exists"#)]
fn project_exists(world: &mut TrackerWorld, name: String) -> Result<(), eyre::Report> {
    let project = run_async(world.projects.create_project(CreateProjectRequest::new(name)))
        .wrap_err("create project in scenario setup")?;
    world.last_project = Some(project);
    Ok(())
}

#[given("{count:usize} projects exist")]
fn projects_exist(world: &mut TrackerWorld, count: usize) -> Result<(), eyre::Report> {
    for index in 1..=count {
        run_async(
            world
                .projects
                .create_project(CreateProjectRequest::new(format!("Project {index}"))),
        )
        .wrap_err_with(|| format!("create project {index} in scenario setup"))?;
    }
    Ok(())
}

#[given(r#"task "{title}" exists in project {project_id:i64}"#)]
fn task_exists(
    world: &mut TrackerWorld,
    title: String,
    project_id: i64,
) -> Result<(), eyre::Report> {
    let task = run_async(
        world
            .tasks
            .add_task_to_project(AddTaskRequest::new(ProjectId::new(project_id), title)),
    )
    .wrap_err("add task in scenario setup")?;
    world.last_task = Some(task);
    Ok(())
}

#[given("project {project_id:i64} holds {count:usize} tasks")]
fn project_holds_tasks(
    world: &mut TrackerWorld,
    project_id: i64,
    count: usize,
) -> Result<(), eyre::Report> {
    for index in 1..=count {
        run_async(world.tasks.add_task_to_project(AddTaskRequest::new(
            ProjectId::new(project_id),
            format!("Task {index}"),
        )))
        .wrap_err_with(|| format!("add task {index} in scenario setup"))?;
    }
    Ok(())
}
