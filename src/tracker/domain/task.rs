//! Task aggregate, its unsaved draft, and the status side effects.

use super::{Description, ProjectId, TaskId, TaskStatus, TaskTitle, TrackerDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// A task that has been validated but not yet persisted.
///
/// Drafts always start in [`TaskStatus::Todo`] without a closing timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    project_id: ProjectId,
    title: TaskTitle,
    description: Option<Description>,
    deadline: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object for building a [`NewTask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskParams {
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<Description>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Creates a task draft stamped with the current clock time.
    #[must_use]
    pub fn new(params: NewTaskParams, clock: &impl Clock) -> Self {
        Self {
            project_id: params.project_id,
            title: params.title,
            description: params.description,
            deadline: params.deadline,
            created_at: clock.utc(),
        }
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the initial status, always [`TaskStatus::Todo`].
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::Todo
    }

    /// Binds the draft to a storage-assigned identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            status: TaskStatus::Todo,
            deadline: self.deadline,
            created_at: self.created_at,
            closed_at: None,
        }
    }
}

/// Task aggregate root.
///
/// `closed_at` is present if and only if the status is
/// [`TaskStatus::Done`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: Option<Description>,
    status: TaskStatus,
    deadline: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<Description>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted deadline, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted closing timestamp, if any.
    pub closed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::ClosedAtMismatch`] when the stored
    /// closing timestamp disagrees with the stored status.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TrackerDomainError> {
        if data.status.is_done() != data.closed_at.is_some() {
            return Err(TrackerDomainError::ClosedAtMismatch(data.id));
        }
        Ok(Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            deadline: data.deadline,
            created_at: data.created_at,
            closed_at: data.closed_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the closing timestamp, present only while the task is done.
    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    /// Moves the task to `status`.
    ///
    /// Every transition is permitted. Moving to [`TaskStatus::Done`] stamps
    /// `closed_at` unless it is already set, so re-closing keeps the
    /// original timestamp; any other status clears it.
    pub fn change_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        if status.is_done() {
            if self.closed_at.is_none() {
                self.closed_at = Some(clock.utc());
            }
        } else {
            self.closed_at = None;
        }
    }
}
