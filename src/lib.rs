// Library exports for the api binary, the seed tool and tests
pub mod config;
pub mod db;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use config::Config;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Build the full router over an already migrated store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home::index))
        .route("/health", get(routes::health::health_check))
        .route("/metrics", get(routes::metrics::metrics_handler))
        .route(
            "/meals",
            get(routes::meals::list_meals).post(routes::meals::create_meal),
        )
        .route(
            "/exercises",
            get(routes::exercises::list_exercises).post(routes::exercises::create_exercise),
        )
        .route("/reports", get(routes::reports::get_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
