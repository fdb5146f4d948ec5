//! Maps service errors to structured HTTP responses.

use crate::todo::services::TaskServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Transport-level error type that maps to HTTP responses.
///
/// Only two shapes exist: a missing task renders as 404, and every other
/// failure is surfaced as an opaque 500 with the error's message. No further
/// status-code taxonomy is applied.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds the not-found error for a task identifier.
    #[must_use]
    pub fn task_not_found(id: i64) -> Self {
        Self::NotFound(format!("task with id {id} was not found"))
    }
}

impl From<TaskServiceError> for AppError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(id) => Self::task_not_found(id),
            TaskServiceError::Repository(inner) => Self::Internal(inner.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
