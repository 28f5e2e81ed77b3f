//! Then steps for tracker behaviour scenarios.

use super::world::{TrackerWorld, run_async};
use rstest_bdd_macros::then;
use tasklane::tracker::{
    domain::{ProjectId, TaskId, TaskStatus},
    services::{EntityKind, Identifier, TrackerError},
};

#[then("the last project has identifier {id:i64}")]
fn last_project_has_identifier(world: &TrackerWorld, id: i64) -> Result<(), eyre::Report> {
    let project = world
        .last_project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    if project.id() != ProjectId::new(id) {
        return Err(eyre::eyre!("expected project {id}, found {}", project.id()));
    }
    Ok(())
}

#[then("the last task has identifier {id:i64}")]
fn last_task_has_identifier(world: &TrackerWorld, id: i64) -> Result<(), eyre::Report> {
    let task = world.require_task()?;
    if task.id() != TaskId::new(id) {
        return Err(eyre::eyre!("expected task {id}, found {}", task.id()));
    }
    Ok(())
}

#[then(r#"the last task is "{status}" without a closing time"#)]
fn last_task_is_open(world: &TrackerWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.require_task()?;
    if task.status() != expected {
        return Err(eyre::eyre!("expected status {expected}, found {}", task.status()));
    }
    if let Some(closed_at) = task.closed_at() {
        return Err(eyre::eyre!("expected no closing time, found {closed_at}"));
    }
    Ok(())
}

#[then("the last task has a closing time")]
fn last_task_is_closed(world: &TrackerWorld) -> Result<(), eyre::Report> {
    let task = world.require_task()?;
    if task.status() != TaskStatus::Done || task.closed_at().is_none() {
        return Err(eyre::eyre!(
            "expected a done task with a closing time, found {} / {:?}",
            task.status(),
            task.closed_at()
        ));
    }
    Ok(())
}

#[then("the closing time is unchanged")]
fn closing_time_is_unchanged(world: &TrackerWorld) -> Result<(), eyre::Report> {
    let task = world.require_task()?;
    if world.previous_closed_at.is_none() || task.closed_at() != world.previous_closed_at {
        return Err(eyre::eyre!(
            "expected closing time {:?}, found {:?}",
            world.previous_closed_at,
            task.closed_at()
        ));
    }
    Ok(())
}

#[then("task {id:i64} cannot be found")]
fn task_cannot_be_found(world: &TrackerWorld, id: i64) -> Result<(), eyre::Report> {
    let result = run_async(world.tasks.get_task_by_id(TaskId::new(id)));
    if !matches!(
        result,
        Err(TrackerError::NotFound {
            kind: EntityKind::Task,
            identifier: Identifier::Id(missing),
        }) if missing == id
    ) {
        return Err(eyre::eyre!("expected task {id} to be missing, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the operation fails because the name "{name}" is taken"#)]
fn fails_with_duplicate_name(world: &TrackerWorld, name: String) -> Result<(), eyre::Report> {
    let err = world.require_error()?;
    if !matches!(err, TrackerError::DuplicateName(taken) if *taken == name) {
        return Err(eyre::eyre!("expected DuplicateName({name}), got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails because the project limit of {limit:usize} is reached")]
fn fails_with_project_limit(world: &TrackerWorld, limit: usize) -> Result<(), eyre::Report> {
    let err = world.require_error()?;
    if !matches!(
        err,
        TrackerError::CapacityExceeded {
            kind: EntityKind::Project,
            limit: reached,
            project: None,
        } if *reached == limit
    ) {
        return Err(eyre::eyre!("expected project capacity error, got {err:?}"));
    }
    Ok(())
}

#[then(r#"the operation fails because "{name}" reached its task limit of {limit:usize}"#)]
fn fails_with_task_limit(
    world: &TrackerWorld,
    name: String,
    limit: usize,
) -> Result<(), eyre::Report> {
    let err = world.require_error()?;
    if !matches!(
        err,
        TrackerError::CapacityExceeded {
            kind: EntityKind::Task,
            limit: reached,
            project: Some(project),
        } if *reached == limit && *project == name
    ) {
        return Err(eyre::eyre!("expected task capacity error, got {err:?}"));
    }
    Ok(())
}
