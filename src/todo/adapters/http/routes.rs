//! Route handlers for the task service.

use super::{error::AppError, wire::WireTask};
use crate::todo::{domain::TaskUpdate, ports::TaskRepository, services::TaskService};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;

/// Shared transport dependencies.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: Arc<TaskService<R, C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates transport state around a task service.
    #[must_use]
    pub const fn new(service: Arc<TaskService<R, C>>) -> Self {
        Self { service }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Request body for the update operation.
///
/// An empty `description` leaves the stored description unchanged;
/// `completed` always overwrites the stored flag, including `false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    /// Replacement description; empty means "no change".
    #[serde(default)]
    pub description: String,
    /// Replacement completion flag.
    #[serde(default)]
    pub completed: bool,
}

/// Builds the task router on the given state.
///
/// Routes:
/// - `POST   /v1/tasks` — create a task
/// - `GET    /v1/tasks` — list all tasks
/// - `GET    /v1/tasks/{id}` — fetch one task
/// - `PUT    /v1/tasks/{id}` — update one task
/// - `DELETE /v1/tasks/{id}` — delete one task
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/v1/tasks", get(get_list_task).post(create_task))
        .route(
            "/v1/tasks/{id}",
            get(get_task_by_id).put(update_task).delete(delete_task),
        )
        .with_state(state)
}

async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    Json(request): Json<WireTask>,
) -> Result<Json<WireTask>, AppError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let created = state.service.create(request.into_domain()).await?;
    Ok(Json(WireTask::from_domain(&created)))
}

async fn get_task_by_id<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<Json<WireTask>, AppError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state
        .service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::task_not_found(id))?;
    Ok(Json(WireTask::from_domain(&task)))
}

async fn get_list_task<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<Vec<WireTask>>, AppError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.service.list().await?;
    Ok(Json(tasks.iter().map(WireTask::from_domain).collect()))
}

async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<WireTask>, AppError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let update = TaskUpdate {
        description: request.description,
        completed: request.completed,
    };
    let updated = state.service.update(id, update).await?;
    Ok(Json(WireTask::from_domain(&updated)))
}

async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
