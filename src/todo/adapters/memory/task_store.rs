//! In-memory repository for task persistence tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{PersistedTaskData, Task},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned from a monotonically increasing counter starting
/// at 1, mirroring the store's auto-increment column. Mutations follow the
/// port contract: updates and deletes against a missing identifier succeed
/// with zero rows affected.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug)]
struct InMemoryStoreState {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

impl Default for InMemoryStoreState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn insert(&self, data: &Task) -> TaskRepositoryResult<i64> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let id = state.next_id;
        state.next_id += 1;

        // Only the columns the INSERT would carry; updated_at starts unset.
        let stored = Task::from_persisted(PersistedTaskData {
            id,
            description: data.description().to_owned(),
            completed: data.completed(),
            created_at: data.created_at(),
            updated_at: None,
        });
        state.tasks.insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn update_by_id(&self, id: i64, data: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        if let Some(existing) = state.tasks.get_mut(&id) {
            *existing = Task::from_persisted(PersistedTaskData {
                id,
                description: data.description().to_owned(),
                completed: data.completed(),
                created_at: existing.created_at(),
                updated_at: data.updated_at(),
            });
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.tasks.remove(&id);
        Ok(())
    }
}
