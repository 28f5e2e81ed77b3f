//! Error types for tracker domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing tracker domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project name exceeds the storage limit.
    #[error("project name exceeds {limit} character limit: {name}")]
    ProjectNameTooLong {
        /// Rejected name.
        name: String,
        /// Maximum accepted length in characters.
        limit: usize,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task title exceeds the storage limit.
    #[error("task title exceeds {limit} character limit: {title}")]
    TaskTitleTooLong {
        /// Rejected title.
        title: String,
        /// Maximum accepted length in characters.
        limit: usize,
    },

    /// A description exceeds the storage limit.
    #[error("description exceeds {limit} character limit")]
    DescriptionTooLong {
        /// Maximum accepted length in characters.
        limit: usize,
    },

    /// A persisted task carries a closing timestamp that disagrees with its
    /// status.
    #[error("task {0} has a closed_at value inconsistent with its status")]
    ClosedAtMismatch(TaskId),
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
