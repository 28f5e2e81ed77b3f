//! Port contracts for project and task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by tracker
//! services.

pub mod error;
pub mod project;
pub mod task;

pub use error::{RepositoryError, RepositoryResult};
pub use project::ProjectRepository;
pub use task::TaskRepository;
