//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task service.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
