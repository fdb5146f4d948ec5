//! Domain model for the task list.
//!
//! The domain models a single aggregate: the task record, its timestamps,
//! and the merge rule applied when a caller updates it. All infrastructure
//! concerns are kept outside the domain boundary.

mod task;

pub use task::{PersistedTaskData, Task, TaskUpdate};
