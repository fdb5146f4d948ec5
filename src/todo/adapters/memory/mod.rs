//! In-memory adapter for task persistence tests.

mod task_store;

pub use task_store::InMemoryTaskStore;
