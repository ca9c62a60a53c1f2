pub mod api;
pub mod config;
pub mod errors;
pub mod monitoring;
pub mod registry;

use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use registry::ActivityRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: ActivityRegistry,
    pub monitoring: Option<monitoring::MonitoringLayer>,
}

impl AppState {
    pub fn new(registry: ActivityRegistry, monitoring: Option<monitoring::MonitoringLayer>) -> Self {
        Self {
            registry,
            monitoring,
        }
    }
}

/// Builds the full HTTP surface: the activities API, the static front end
/// and the health check.
pub fn router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // REST API
        .route("/activities", get(api::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(api::signup_for_activity),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(api::unregister_participant),
        )
        // Front end
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
