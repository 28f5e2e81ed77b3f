//! End-to-end tracker flows over the in-memory store.
//!
//! These exercise the public API the way the binary does: one store shared
//! by both services, default capacity limits, and identifiers assigned by
//! the store.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tasklane::tracker::{
    adapters::memory::InMemoryTrackerStore,
    domain::{ProjectId, TaskStatus},
    services::{
        AddTaskRequest, CapacityLimits, CreateProjectRequest, EntityKind, ProjectService,
        TaskService, TrackerError, UpdateProjectRequest,
    },
};

struct Tracker {
    projects: ProjectService<InMemoryTrackerStore, DefaultClock>,
    tasks: TaskService<InMemoryTrackerStore, InMemoryTrackerStore, DefaultClock>,
}

#[fixture]
fn tracker() -> Tracker {
    let store = Arc::new(InMemoryTrackerStore::new());
    let clock = Arc::new(DefaultClock);
    let limits = CapacityLimits::default();
    Tracker {
        projects: ProjectService::new(Arc::clone(&store), Arc::clone(&clock), limits),
        tasks: TaskService::new(Arc::clone(&store), store, clock, limits),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn alpha_scenario(tracker: Tracker) -> eyre::Result<()> {
    let alpha = tracker
        .projects
        .create_project(CreateProjectRequest::new("Alpha").with_description(""))
        .await?;
    eyre::ensure!(alpha.id() == ProjectId::new(1), "first project should get id 1");
    eyre::ensure!(
        alpha.description().map(|text| text.as_str()) == Some(""),
        "empty description should be kept as supplied"
    );

    let duplicate = tracker
        .projects
        .create_project(CreateProjectRequest::new("Alpha").with_description(""))
        .await;
    eyre::ensure!(
        matches!(duplicate, Err(TrackerError::DuplicateName(ref name)) if name == "Alpha"),
        "second Alpha should be a duplicate, got {duplicate:?}"
    );

    let task = tracker
        .tasks
        .add_task_to_project(AddTaskRequest::new(alpha.id(), "Write spec"))
        .await?;
    eyre::ensure!(task.id().value() == 1, "first task should get id 1");
    eyre::ensure!(task.status() == TaskStatus::Todo && task.closed_at().is_none());

    let done = tracker
        .tasks
        .change_task_status(task.id(), TaskStatus::Done)
        .await?;
    eyre::ensure!(done.closed_at().is_some(), "done task should be closed");

    let doing = tracker
        .tasks
        .change_task_status(task.id(), TaskStatus::Doing)
        .await?;
    eyre::ensure!(doing.closed_at().is_none(), "reopened task should not be closed");

    tracker.projects.delete_project_by_id(alpha.id()).await?;
    let gone = tracker.tasks.get_task_by_id(task.id()).await;
    eyre::ensure!(
        matches!(gone, Err(TrackerError::NotFound { kind: EntityKind::Task, .. })),
        "task should be deleted with its project, got {gone:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn default_limits_allow_ten_projects_and_twenty_tasks(tracker: Tracker) -> eyre::Result<()> {
    for index in 1..=10 {
        tracker
            .projects
            .create_project(CreateProjectRequest::new(format!("Project {index}")))
            .await?;
    }
    let eleventh = tracker
        .projects
        .create_project(CreateProjectRequest::new("Project 11"))
        .await;
    eyre::ensure!(
        matches!(
            eleventh,
            Err(TrackerError::CapacityExceeded { kind: EntityKind::Project, limit: 10, .. })
        ),
        "eleventh project should exceed the cap, got {eleventh:?}"
    );

    let first = ProjectId::new(1);
    for index in 1..=20 {
        tracker
            .tasks
            .add_task_to_project(AddTaskRequest::new(first, format!("Task {index}")))
            .await?;
    }
    let twenty_first = tracker
        .tasks
        .add_task_to_project(AddTaskRequest::new(first, "Task 21"))
        .await;
    eyre::ensure!(
        matches!(
            twenty_first,
            Err(TrackerError::CapacityExceeded { kind: EntityKind::Task, limit: 20, .. })
        ),
        "twenty-first task should exceed the cap, got {twenty_first:?}"
    );

    tracker
        .tasks
        .add_task_to_project(AddTaskRequest::new(ProjectId::new(2), "Elsewhere"))
        .await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn renamed_project_is_found_under_its_new_name_only(tracker: Tracker) -> eyre::Result<()> {
    let alpha = tracker
        .projects
        .create_project(CreateProjectRequest::new("Alpha"))
        .await?;
    tracker
        .projects
        .update_project(UpdateProjectRequest::new(alpha.id(), "Omega").with_description("renamed"))
        .await?;

    let by_new_name = tracker.projects.get_project_by_name("Omega").await?;
    let by_old_name = tracker.projects.get_project_by_name("Alpha").await;

    eyre::ensure!(by_new_name.id() == alpha.id());
    eyre::ensure!(
        matches!(by_old_name, Err(TrackerError::NotFound { .. })),
        "old name should no longer resolve"
    );

    // The freed name can be reused.
    tracker
        .projects
        .create_project(CreateProjectRequest::new("Alpha"))
        .await?;
    Ok(())
}
