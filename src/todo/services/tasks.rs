//! Service layer enforcing task creation, update, and deletion invariants.
//!
//! Provides [`TaskService`] which stamps timestamps, merges updates, checks
//! existence before destructive operations, and re-reads canonical state
//! after every write.
//!
//! Update and delete perform a read-then-write sequence without a store
//! transaction: two concurrent updates (or an update racing a delete) on the
//! same identifier can interleave between the existence check and the
//! mutating statement. This matches the store's contract of one independent
//! statement per call and is accepted rather than locked around.

use crate::todo::{
    domain::{Task, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The task targeted by an update or delete does not exist.
    #[error("task with id {0} was not found")]
    NotFound(i64),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Persists a new task and returns the canonical stored row.
    ///
    /// The creation timestamp is stamped here from the injected clock,
    /// overriding whatever the caller decoded. After the insert the row is
    /// re-read by its generated identifier so the response reflects
    /// committed state (store defaults included) rather than the input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails, or
    /// [`TaskServiceError::NotFound`] when the re-read finds no row (only
    /// possible under a concurrent delete).
    pub async fn create(&self, mut data: Task) -> TaskServiceResult<Task> {
        data.stamp_created(self.clock.utc());
        let id = self.repository.insert(&data).await?;
        self.fetch_canonical(id).await
    }

    /// Looks up a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_by_id(&self, id: i64) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every task, in whatever order the store yields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Merges changes into an existing task and returns the canonical
    /// stored row.
    ///
    /// The existing row is fetched first; a non-empty description replaces
    /// the stored one while an empty description leaves it unchanged, the
    /// completion flag is always overwritten, and `updated_at` is stamped
    /// from the clock. The merged row is written unconditionally and then
    /// re-read.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given
    /// identifier, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn update(&self, id: i64, update: TaskUpdate) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;

        task.apply_update(update, self.clock.utc());
        self.repository.update_by_id(id, &task).await?;
        self.fetch_canonical(id).await
    }

    /// Deletes an existing task.
    ///
    /// Existence is checked first so that "nothing to delete" is reported
    /// as [`TaskServiceError::NotFound`] instead of silently succeeding.
    /// The delete statement itself is unconditional and its row count is
    /// not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given
    /// identifier, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn delete(&self, id: i64) -> TaskServiceResult<()> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;

        Ok(self.repository.delete_by_id(id).await?)
    }

    async fn fetch_canonical(&self, id: i64) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }
}
