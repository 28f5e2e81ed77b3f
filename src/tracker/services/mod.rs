//! Application services for project and task tracking.
//!
//! Services validate input through the domain, enforce capacity and
//! uniqueness rules against the repositories, and never cache state
//! between calls.

mod error;
mod limits;
mod project;
mod task;

pub use error::{EntityKind, Identifier, TrackerError, TrackerResult};
pub use limits::CapacityLimits;
pub use project::{CreateProjectRequest, ProjectService, UpdateProjectRequest};
pub use task::{AddTaskRequest, TaskService};
