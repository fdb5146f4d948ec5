//! HTTP transport adapter for the task service.
//!
//! Exposes the five task operations as JSON endpoints, decoding wire
//! messages into domain values and encoding service results back. The
//! adapter holds no business rules; it delegates every call to
//! [`TaskService`](crate::todo::services::TaskService).

mod error;
mod routes;
mod wire;

pub use error::AppError;
pub use routes::{AppState, UpdateTaskRequest, router};
pub use wire::WireTask;
