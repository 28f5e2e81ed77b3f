//! Domain model for project and task tracking.
//!
//! Projects own tasks. Identifiers are assigned by persistence, so the
//! domain distinguishes unsaved drafts ([`NewProject`], [`NewTask`]) from
//! stored aggregates ([`Project`], [`Task`]). All infrastructure concerns
//! stay outside this boundary.

mod description;
mod error;
mod ids;
mod name;
mod project;
mod status;
mod task;

pub use description::Description;
pub use error::{ParseTaskStatusError, TrackerDomainError};
pub use ids::{ProjectId, TaskId};
pub use name::{ProjectName, TaskTitle};
pub use project::{NewProject, PersistedProjectData, Project};
pub use status::TaskStatus;
pub use task::{NewTask, NewTaskParams, PersistedTaskData, Task};
