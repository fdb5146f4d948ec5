//! Application services for the task list.

mod tasks;

pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
