//! `PostgreSQL` repository implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::task,
};
use crate::todo::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool type used by the task repository.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for the given `PostgreSQL` URL.
///
/// # Errors
///
/// Returns the r2d2 [`PoolError`] when the pool cannot be initialised.
pub fn connect_pool(database_url: &str) -> Result<TaskPgPool, PoolError> {
    Pool::builder().build(ConnectionManager::new(database_url))
}

/// `PostgreSQL`-backed task repository.
///
/// Each operation issues a single statement on a pooled connection. Driver
/// errors are wrapped opaquely; no retries, no row-count interpretation.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<i64> {
        let new_row = NewTaskRow::from_task(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(task::table)
                .values(&new_row)
                .returning(task::id)
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = task::table
                .filter(task::id.eq(id))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(TaskRow::into_task))
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = task::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(TaskRow::into_task).collect())
        })
        .await
    }

    async fn update_by_id(&self, id: i64, data: &Task) -> TaskRepositoryResult<()> {
        let description = data.description().to_owned();
        let complete = data.completed();
        let updated_at = data.updated_at();

        self.run_blocking(move |connection| {
            // Unconditional UPDATE; a zero row count is success here.
            diesel::update(task::table.filter(task::id.eq(id)))
                .set((
                    task::description.eq(&description),
                    task::complete.eq(complete),
                    task::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete_by_id(&self, id: i64) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Unconditional DELETE; a zero row count is success here.
            diesel::delete(task::table.filter(task::id.eq(id)))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}
