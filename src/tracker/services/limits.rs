//! Capacity limits enforced by the tracker services.

/// Ceilings on entity counts, passed to services at construction.
///
/// # Examples
///
/// ```
/// use tasklane::tracker::services::CapacityLimits;
///
/// let limits = CapacityLimits::default();
/// assert_eq!(limits.max_projects, 10);
/// assert_eq!(limits.max_tasks_per_project, 20);
///
/// let tight = CapacityLimits::new(1, 2);
/// assert_eq!(tight.max_tasks_per_project, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityLimits {
    /// Maximum number of projects across the whole store.
    pub max_projects: usize,
    /// Maximum number of tasks in a single project.
    pub max_tasks_per_project: usize,
}

impl CapacityLimits {
    /// Default project ceiling.
    pub const DEFAULT_MAX_PROJECTS: usize = 10;

    /// Default per-project task ceiling.
    pub const DEFAULT_MAX_TASKS_PER_PROJECT: usize = 20;

    /// Creates limits with explicit values.
    #[must_use]
    pub const fn new(max_projects: usize, max_tasks_per_project: usize) -> Self {
        Self {
            max_projects,
            max_tasks_per_project,
        }
    }
}

impl Default for CapacityLimits {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_PROJECTS,
            Self::DEFAULT_MAX_TASKS_PER_PROJECT,
        )
    }
}
