//! Repository port for task persistence.

use crate::todo::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every method issues exactly one statement against the store, performs no
/// local retries, and propagates driver failures wrapped in
/// [`TaskRepositoryError::Persistence`]. The repository synthesizes no
/// domain errors: a missing row is `Ok(None)` on lookup, and a mutation that
/// matched zero rows is indistinguishable from success.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task and returns the store-assigned identifier.
    ///
    /// Only description, completion flag, and creation timestamp are
    /// written; the identifier is auto-assigned and `updated_at` is left
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the statement
    /// fails.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<i64>;

    /// Looks up a single task by primary key.
    ///
    /// Returns `None` when no row has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the statement
    /// fails.
    async fn find_by_id(&self, id: i64) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task in the store, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the statement
    /// fails.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Unconditionally updates the row with the given identifier.
    ///
    /// Zero rows affected is not distinguished from success at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the statement
    /// fails.
    async fn update_by_id(&self, id: i64, task: &Task) -> TaskRepositoryResult<()>;

    /// Unconditionally deletes the row with the given identifier.
    ///
    /// Zero rows affected is not distinguished from success at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the statement
    /// fails.
    async fn delete_by_id(&self, id: i64) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure, surfaced unchanged from the driver.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
