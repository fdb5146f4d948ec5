//! Task-list service entry point.
//!
//! Usage:
//!
//! ```text
//! server [config-path]
//! ```
//!
//! Loads YAML configuration (defaulting to `config/dev.yaml`), opens the
//! `PostgreSQL` pool, wires the persistence gateway, business service, and
//! HTTP adapter together, and serves until interrupted. The three tiers are
//! constructed here and injected explicitly; nothing inside the pipeline
//! opens connections or binds sockets itself.

use std::env;
use std::sync::Arc;

use mockable::DefaultClock;
use thiserror::Error;
use todolist::config::{Config, ConfigError};
use todolist::todo::adapters::http::{AppState, router};
use todolist::todo::adapters::postgres::{PostgresTaskRepository, connect_pool};
use todolist::todo::services::TaskService;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/dev.yaml";

/// Errors that abort server startup.
#[derive(Debug, Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to open database pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let config = Config::from_yaml_file(&config_path)?;

    let pool = connect_pool(&config.database.connection_url())?;
    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = Arc::new(TaskService::new(repository, Arc::new(DefaultClock)));
    let app = router(AppState::new(service)).layer(TraceLayer::new_for_http());

    let bind_addr = config.todolist.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(ServerError::Bind)?;
    tracing::info!(addr = %bind_addr, "task service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install shutdown signal handler");
    }
}
