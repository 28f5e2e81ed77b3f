//! `PostgreSQL` tracker store scoped to one unit of work.

use super::{
    models::{
        NewProjectRow, NewTaskRow, ProjectChangeset, ProjectRow, TaskChangeset, TaskRow,
    },
    schema::{projects, tasks},
};
use crate::tracker::{
    domain::{
        Description, NewProject, NewTask, PersistedProjectData, PersistedTaskData, Project,
        ProjectId, ProjectName, Task, TaskId, TaskStatus, TaskTitle,
    },
    ports::{ProjectRepository, RepositoryError, RepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use diesel::connection::{AnsiTransactionManager, SimpleConnection, TransactionManager};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// `PostgreSQL` connection pool type used by tracker adapters.
pub type TrackerPgPool = Pool<ConnectionManager<PgConnection>>;

type TrackerPgConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Schema statements for the tracker tables. Safe to run repeatedly.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_projects_and_tasks/up.sql");

const PROJECT_NAME_CONSTRAINT: &str = "idx_projects_name_unique";

/// Builds a small connection pool for `database_url`.
///
/// Pool construction opens its first connection eagerly, so it runs on the
/// blocking thread pool.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when the database cannot be
/// reached.
pub async fn connect_pool(database_url: &str, max_size: u32) -> RepositoryResult<TrackerPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(RepositoryError::persistence)
    })
    .await
    .map_err(RepositoryError::persistence)??;
    debug!(max_size, "tracker connection pool ready");
    Ok(pool)
}

/// Applies [`SCHEMA_SQL`] to the database behind `pool`.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when no connection can be
/// obtained or a statement fails.
pub async fn apply_schema(pool: &TrackerPgPool) -> RepositoryResult<()> {
    let pool_handle = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool_handle.get().map_err(RepositoryError::persistence)?;
        connection
            .batch_execute(SCHEMA_SQL)
            .map_err(RepositoryError::persistence)
    })
    .await
    .map_err(RepositoryError::persistence)??;
    info!("tracker schema applied");
    Ok(())
}

/// `PostgreSQL`-backed store implementing both tracker repositories.
///
/// The store holds a single pooled connection with an open transaction.
/// Every repository call runs inside that transaction; callers finish the
/// unit of work with [`commit`](Self::commit) or
/// [`rollback`](Self::rollback). A store dropped without either is rolled
/// back when the connection is discarded. Each write runs in a savepoint so
/// a rejected statement leaves the surrounding transaction usable.
#[derive(Clone)]
pub struct PostgresTrackerStore {
    connection: Arc<Mutex<TrackerPgConnection>>,
}

impl fmt::Debug for PostgresTrackerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresTrackerStore").finish_non_exhaustive()
    }
}

impl PostgresTrackerStore {
    /// Checks a connection out of `pool` and opens a transaction on it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when no connection is
    /// available or the transaction cannot be started.
    pub async fn begin(pool: &TrackerPgPool) -> RepositoryResult<Self> {
        let pool_handle = pool.clone();
        let connection = tokio::task::spawn_blocking(move || {
            let mut pooled = pool_handle.get().map_err(RepositoryError::persistence)?;
            AnsiTransactionManager::begin_transaction(&mut *pooled)
                .map_err(RepositoryError::persistence)?;
            Ok::<_, RepositoryError>(pooled)
        })
        .await
        .map_err(RepositoryError::persistence)??;
        debug!("tracker unit of work started");
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Commits every change made through this store.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the commit fails.
    pub async fn commit(&self) -> RepositoryResult<()> {
        self.run_blocking(|connection| {
            AnsiTransactionManager::commit_transaction(connection)
                .map_err(RepositoryError::persistence)
        })
        .await?;
        debug!("tracker unit of work committed");
        Ok(())
    }

    /// Discards every change made through this store.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the rollback fails.
    pub async fn rollback(&self) -> RepositoryResult<()> {
        self.run_blocking(|connection| {
            AnsiTransactionManager::rollback_transaction(connection)
                .map_err(RepositoryError::persistence)
        })
        .await?;
        debug!("tracker unit of work rolled back");
        Ok(())
    }

    async fn run_blocking<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let connection = Arc::clone(&self.connection);
        tokio::task::spawn_blocking(move || {
            let mut guard = connection.lock().map_err(|err| {
                RepositoryError::persistence(std::io::Error::other(err.to_string()))
            })?;
            f(&mut **guard)
        })
        .await
        .map_err(RepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresTrackerStore {
    async fn add(&self, project: &NewProject) -> RepositoryResult<Project> {
        let name = project.name().clone();
        let new_row = NewProjectRow {
            name: name.as_str().to_owned(),
            description: project.description().map(|d| d.as_str().to_owned()),
            created_at: project.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = connection
                .transaction(|conn| {
                    diesel::insert_into(projects::table)
                        .values(&new_row)
                        .returning(ProjectRow::as_returning())
                        .get_result::<ProjectRow>(conn)
                })
                .map_err(|err| map_project_write_error(err, &name))?;
            row_to_project(row)
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.value())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn find_by_name(&self, name: &ProjectName) -> RepositoryResult<Option<Project>> {
        let name_str = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::name.eq(&name_str))
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn update(&self, project: &Project) -> RepositoryResult<Project> {
        let project_id = project.id();
        let name = project.name().clone();
        let changeset = ProjectChangeset {
            name: name.as_str().to_owned(),
            description: project.description().map(|d| d.as_str().to_owned()),
        };

        self.run_blocking(move |connection| {
            let row = connection
                .transaction(|conn| {
                    diesel::update(projects::table.find(project_id.value()))
                        .set(&changeset)
                        .returning(ProjectRow::as_returning())
                        .get_result::<ProjectRow>(conn)
                        .optional()
                })
                .map_err(|err| map_project_write_error(err, &name))?;
            row.map_or_else(|| Err(RepositoryError::ProjectNotFound(project_id)), row_to_project)
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> RepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(projects::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            debug!(project_id = %id, deleted, "project delete executed");
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTrackerStore {
    async fn add(&self, task: &NewTask) -> RepositoryResult<Task> {
        let project_id = task.project_id();
        let new_row = NewTaskRow {
            project_id: project_id.value(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|d| d.as_str().to_owned()),
            status: task.status().as_str().to_owned(),
            deadline: task.deadline(),
            created_at: task.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = connection
                .transaction(|conn| {
                    diesel::insert_into(tasks::table)
                        .values(&new_row)
                        .returning(TaskRow::as_returning())
                        .get_result::<TaskRow>(conn)
                })
                .map_err(|err| map_task_write_error(err, project_id))?;
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_title(&self, title: &TaskTitle) -> RepositoryResult<Option<Task>> {
        let title_str = title.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::title.eq(&title_str))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_for_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update(&self, task: &Task) -> RepositoryResult<Task> {
        let task_id = task.id();
        let project_id = task.project_id();
        let changeset = TaskChangeset {
            title: task.title().as_str().to_owned(),
            description: task.description().map(|d| d.as_str().to_owned()),
            status: task.status().as_str().to_owned(),
            deadline: task.deadline(),
            closed_at: task.closed_at(),
        };

        self.run_blocking(move |connection| {
            let row = connection
                .transaction(|conn| {
                    diesel::update(tasks::table.find(task_id.value()))
                        .set(&changeset)
                        .returning(TaskRow::as_returning())
                        .get_result::<TaskRow>(conn)
                        .optional()
                })
                .map_err(|err| map_task_write_error(err, project_id))?;
            row.map_or_else(|| Err(RepositoryError::TaskNotFound(task_id)), row_to_task)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_project(row: ProjectRow) -> RepositoryResult<Project> {
    let ProjectRow {
        id,
        name,
        description,
        created_at,
    } = row;

    let data = PersistedProjectData {
        id: ProjectId::new(id),
        name: ProjectName::new(name).map_err(RepositoryError::invalid_persisted_data)?,
        description: Description::optional(description)
            .map_err(RepositoryError::invalid_persisted_data)?,
        created_at,
    };
    Ok(Project::from_persisted(data))
}

fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let TaskRow {
        id,
        project_id,
        title,
        description,
        status,
        deadline,
        created_at,
        closed_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        project_id: ProjectId::new(project_id),
        title: TaskTitle::new(title).map_err(RepositoryError::invalid_persisted_data)?,
        description: Description::optional(description)
            .map_err(RepositoryError::invalid_persisted_data)?,
        status: TaskStatus::try_from(status.as_str())
            .map_err(RepositoryError::invalid_persisted_data)?,
        deadline,
        created_at,
        closed_at,
    };
    Task::from_persisted(data).map_err(RepositoryError::invalid_persisted_data)
}

fn map_project_write_error(err: DieselError, name: &ProjectName) -> RepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_project_name_violation(info.as_ref()) =>
        {
            RepositoryError::DuplicateProjectName(name.clone())
        }
        _ => RepositoryError::persistence(err),
    }
}

fn map_task_write_error(err: DieselError, project_id: ProjectId) -> RepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            RepositoryError::UnknownProject(project_id)
        }
        _ => RepositoryError::persistence(err),
    }
}

fn is_project_name_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|constraint| constraint == PROJECT_NAME_CONSTRAINT)
}
