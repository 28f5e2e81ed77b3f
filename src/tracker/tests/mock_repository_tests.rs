//! Failure propagation tests using mocked repositories.

use std::sync::Arc;

use crate::tracker::{
    domain::{
        NewProject, NewTask, Project, ProjectId, ProjectName, Task, TaskId, TaskTitle,
        TrackerDomainError,
    },
    ports::{ProjectRepository, RepositoryError, RepositoryResult, TaskRepository},
    services::{
        AddTaskRequest, CapacityLimits, CreateProjectRequest, EntityKind, Identifier,
        ProjectService, TaskService, TrackerError,
    },
};
use async_trait::async_trait;
use mockable::DefaultClock;
use mockall::mock;
use rstest::rstest;

mock! {
    Projects {}

    #[async_trait]
    impl ProjectRepository for Projects {
        async fn add(&self, project: &NewProject) -> RepositoryResult<Project>;
        async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
        async fn find_by_name(&self, name: &ProjectName) -> RepositoryResult<Option<Project>>;
        async fn list_all(&self) -> RepositoryResult<Vec<Project>>;
        async fn update(&self, project: &Project) -> RepositoryResult<Project>;
        async fn delete(&self, id: ProjectId) -> RepositoryResult<()>;
    }
}

mock! {
    Tasks {}

    #[async_trait]
    impl TaskRepository for Tasks {
        async fn add(&self, task: &NewTask) -> RepositoryResult<Task>;
        async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;
        async fn find_by_title(&self, title: &TaskTitle) -> RepositoryResult<Option<Task>>;
        async fn list_all(&self) -> RepositoryResult<Vec<Task>>;
        async fn list_for_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>>;
        async fn update(&self, task: &Task) -> RepositoryResult<Task>;
        async fn delete(&self, id: TaskId) -> RepositoryResult<()>;
    }
}

fn connection_lost() -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other("connection reset by peer"))
}

fn stored_project(id: i64, name: &str) -> Project {
    NewProject::new(
        ProjectName::new(name).expect("valid name"),
        None,
        &DefaultClock,
    )
    .into_project(ProjectId::new(id))
}

fn project_service(projects: MockProjects) -> ProjectService<MockProjects, DefaultClock> {
    ProjectService::new(
        Arc::new(projects),
        Arc::new(DefaultClock),
        CapacityLimits::default(),
    )
}

fn task_service(
    tasks: MockTasks,
    projects: MockProjects,
) -> TaskService<MockTasks, MockProjects, DefaultClock> {
    TaskService::new(
        Arc::new(tasks),
        Arc::new(projects),
        Arc::new(DefaultClock),
        CapacityLimits::default(),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_input_never_reaches_the_repository() {
    // No expectations: any repository call fails the test.
    let service = project_service(MockProjects::new());

    let err = service
        .create_project(CreateProjectRequest::new("x".repeat(101)))
        .await
        .expect_err("oversized name should be rejected");

    assert!(matches!(
        err,
        TrackerError::Domain(TrackerDomainError::ProjectNameTooLong { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_failure_propagates_unchanged_and_skips_insert() {
    let mut projects = MockProjects::new();
    projects
        .expect_list_all()
        .times(1)
        .returning(|| Err(connection_lost()));
    projects.expect_add().never();
    let service = project_service(projects);

    let err = service
        .create_project(CreateProjectRequest::new("Alpha"))
        .await
        .expect_err("infrastructure failure should surface");

    assert!(matches!(
        err,
        TrackerError::Repository(RepositoryError::Persistence(_))
    ));
    assert_eq!(err.to_string(), "persistence error: connection reset by peer");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storage_uniqueness_violation_surfaces_as_duplicate_name() {
    let mut projects = MockProjects::new();
    projects.expect_list_all().returning(|| Ok(Vec::new()));
    projects.expect_find_by_name().returning(|_| Ok(None));
    projects.expect_add().times(1).returning(|draft| {
        Err(RepositoryError::DuplicateProjectName(draft.name().clone()))
    });
    let service = project_service(projects);

    let err = service
        .create_project(CreateProjectRequest::new("Alpha"))
        .await
        .expect_err("racing insert should be rejected");

    assert!(matches!(err, TrackerError::DuplicateName(ref name) if name == "Alpha"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_count_failure_skips_task_insert() {
    let mut projects = MockProjects::new();
    projects
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_project(id.value(), "Alpha"))));
    let mut tasks = MockTasks::new();
    tasks
        .expect_list_for_project()
        .times(1)
        .returning(|_| Err(connection_lost()));
    tasks.expect_add().never();
    let service = task_service(tasks, projects);

    let err = service
        .add_task_to_project(AddTaskRequest::new(ProjectId::new(1), "Write docs"))
        .await
        .expect_err("infrastructure failure should surface");

    assert!(matches!(
        err,
        TrackerError::Repository(RepositoryError::Persistence(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_key_violation_surfaces_as_missing_project() {
    let mut projects = MockProjects::new();
    projects
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_project(id.value(), "Alpha"))));
    let mut tasks = MockTasks::new();
    tasks.expect_list_for_project().returning(|_| Ok(Vec::new()));
    tasks
        .expect_add()
        .times(1)
        .returning(|draft| Err(RepositoryError::UnknownProject(draft.project_id())));
    let service = task_service(tasks, projects);

    let err = service
        .add_task_to_project(AddTaskRequest::new(ProjectId::new(4), "Write docs"))
        .await
        .expect_err("deleted project should be reported");

    assert!(matches!(
        err,
        TrackerError::NotFound {
            kind: EntityKind::Project,
            identifier: Identifier::Id(4),
        }
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_rows_are_reported_as_repository_errors() {
    let mut tasks = MockTasks::new();
    tasks.expect_find_by_id().returning(|id| {
        Err(RepositoryError::invalid_persisted_data(
            TrackerDomainError::ClosedAtMismatch(id),
        ))
    });
    tasks.expect_update().never();
    let service = task_service(tasks, MockProjects::new());

    let err = service
        .get_task_by_id(TaskId::new(2))
        .await
        .expect_err("corrupt row should surface");

    assert!(matches!(
        err,
        TrackerError::Repository(RepositoryError::InvalidPersistedData(_))
    ));
}
