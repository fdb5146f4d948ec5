//! Unit tests for the HTTP transport adapter and wire encoding.

use std::sync::Arc;

use crate::todo::{
    adapters::http::{AppState, WireTask, router},
    adapters::memory::InMemoryTaskStore,
    domain::{PersistedTaskData, Task},
    services::TaskService,
};
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode, header},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;
use tower::ServiceExt;

// ── Wire encoding ──────────────────────────────────────────────────

#[rstest]
fn encode_maps_absent_update_time_to_zero() {
    let created = Utc.with_ymd_and_hms(2020, 10, 25, 0, 0, 0).single();
    let task = Task::from_persisted(PersistedTaskData {
        id: 1,
        description: "Buy milk".to_owned(),
        completed: false,
        created_at: created,
        updated_at: None,
    });

    let wire = WireTask::from_domain(&task);

    assert_eq!(
        wire.created_at,
        created.map_or(0, |t| t.timestamp()),
        "creation time should encode as its epoch"
    );
    assert_eq!(wire.updated_at, 0, "absent update time should encode as 0");
}

#[rstest]
fn decode_maps_zero_epochs_to_concrete_timestamps() {
    let wire = WireTask {
        id: 1,
        description: "Buy milk".to_owned(),
        completed: false,
        created_at: 0,
        updated_at: 0,
    };

    let task = wire.into_domain();

    // The decode path does not special-case 0 back to "absent".
    assert_eq!(task.created_at().map(|t| t.timestamp()), Some(0));
    assert_eq!(task.updated_at().map(|t| t.timestamp()), Some(0));
}

#[rstest]
fn set_timestamps_round_trip_through_the_wire() {
    let stamp = Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).single();
    let task = Task::from_persisted(PersistedTaskData {
        id: 3,
        description: "Water plants".to_owned(),
        completed: true,
        created_at: stamp,
        updated_at: stamp,
    });

    let decoded = WireTask::from_domain(&task).into_domain();

    assert_eq!(decoded, task);
}

// ── Router behaviour ───────────────────────────────────────────────

#[fixture]
fn app() -> Router {
    let repository = Arc::new(InMemoryTaskStore::new());
    let service = Arc::new(TaskService::new(repository, Arc::new(DefaultClock)));
    router(AppState::new(service))
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = body.map_or_else(
        || {
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request should build")
        },
        move |value| {
            builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .expect("request should build")
        },
    );

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    (status, bytes)
}

fn parse_task(bytes: &Bytes) -> WireTask {
    serde_json::from_slice(bytes).expect("body should be a wire task")
}

async fn create_buy_milk(app: &Router) -> WireTask {
    let (status, body) = send_json(
        app,
        "POST",
        "/v1/tasks",
        Some(json!({"description": "Buy milk", "completed": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    parse_task(&body)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_the_stored_task(app: Router) {
    let task = create_buy_milk(&app).await;

    assert_eq!(task.id, 1);
    assert_eq!(task.description, "Buy milk");
    assert!(!task.completed);
    assert!(task.created_at > 0, "server should stamp creation time");
    assert_eq!(task.updated_at, 0, "never-updated task encodes as 0");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_round_trips(app: Router) {
    let created = create_buy_milk(&app).await;

    let (status, body) = send_json(&app, "GET", "/v1/tasks/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_task(&body), created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_missing_task_is_not_found(app: Router) {
    let (status, _body) = send_json(&app, "GET", "/v1/tasks/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_empty_description_preserves_it(app: Router) {
    create_buy_milk(&app).await;

    let (status, body) = send_json(
        &app,
        "PUT",
        "/v1/tasks/1",
        Some(json!({"description": "", "completed": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let task = parse_task(&body);
    assert_eq!(task.description, "Buy milk");
    assert!(task.completed);
    assert!(task.updated_at > 0, "update should stamp the wire field");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_is_not_found(app: Router) {
    let (status, _body) = send_json(
        &app,
        "PUT",
        "/v1/tasks/42",
        Some(json!({"description": "Anything", "completed": false})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_acknowledges_with_no_content(app: Router) {
    create_buy_milk(&app).await;

    let (status, body) = send_json(&app, "DELETE", "/v1/tasks/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status_after, _body) = send_json(&app, "GET", "/v1/tasks/1", None).await;
    assert_eq!(status_after, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_is_not_found(app: Router) {
    let (status, _body) = send_json(&app, "DELETE", "/v1/tasks/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_one_entry_per_row(app: Router) {
    create_buy_milk(&app).await;
    send_json(
        &app,
        "POST",
        "/v1/tasks",
        Some(json!({"description": "Water plants", "completed": true})),
    )
    .await;

    let (status, body) = send_json(&app, "GET", "/v1/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    let tasks: Vec<WireTask> = serde_json::from_slice(&body).expect("body should be a task list");
    assert_eq!(tasks.len(), 2);
    for task in &tasks {
        assert!(task.created_at > 0);
        assert_eq!(task.updated_at, 0);
    }
}
