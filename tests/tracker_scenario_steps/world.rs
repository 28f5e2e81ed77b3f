//! Shared world state for tracker behaviour scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use tasklane::tracker::{
    adapters::memory::InMemoryTrackerStore,
    domain::{Project, Task},
    services::{CapacityLimits, ProjectService, TaskService, TrackerError},
};

/// Project service type used by the BDD world.
pub type TestProjectService = ProjectService<InMemoryTrackerStore, DefaultClock>;

/// Task service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTrackerStore, InMemoryTrackerStore, DefaultClock>;

/// Scenario world for tracker behaviour tests.
pub struct TrackerWorld {
    pub projects: TestProjectService,
    pub tasks: TestTaskService,
    pub last_project: Option<Project>,
    pub last_task: Option<Task>,
    pub last_error: Option<TrackerError>,
    pub previous_closed_at: Option<DateTime<Utc>>,
}

impl TrackerWorld {
    /// Creates a world backed by an empty store with default limits.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTrackerStore::new());
        let clock = Arc::new(DefaultClock);
        let limits = CapacityLimits::default();

        Self {
            projects: ProjectService::new(Arc::clone(&store), Arc::clone(&clock), limits),
            tasks: TaskService::new(Arc::clone(&store), store, clock, limits),
            last_project: None,
            last_task: None,
            last_error: None,
            previous_closed_at: None,
        }
    }

    /// Records the outcome of a project operation.
    pub fn record_project(&mut self, result: Result<Project, TrackerError>) {
        match result {
            Ok(project) => {
                self.last_project = Some(project);
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
    }

    /// Records the outcome of a task operation.
    pub fn record_task(&mut self, result: Result<Task, TrackerError>) {
        match result {
            Ok(task) => {
                self.last_task = Some(task);
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
    }

    /// Returns the most recent task, failing the step when none exists.
    pub fn require_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns the most recent error, failing the step when none exists.
    pub fn require_error(&self) -> Result<&TrackerError, eyre::Report> {
        self.last_error
            .as_ref()
            .ok_or_else(|| eyre::eyre!("expected the last operation to fail"))
    }
}

impl Default for TrackerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TrackerWorld {
    TrackerWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
