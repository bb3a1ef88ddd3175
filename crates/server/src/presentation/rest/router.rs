use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tradeval_engine::{BatchCoordinator, ValidationEngine};

use super::handlers;

/// Application state shared across handlers
pub struct AppState {
    pub engine: Arc<ValidationEngine>,
    pub coordinator: BatchCoordinator,
}

impl AppState {
    pub fn new(engine: Arc<ValidationEngine>) -> Self {
        AppState {
            coordinator: BatchCoordinator::new(Arc::clone(&engine)),
            engine,
        }
    }
}

/// Create the REST API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Validation endpoints
        .route("/validate", post(handlers::validate))
        .route("/validateBatch", post(handlers::validate_batch))
        // Introspection
        .route("/rules", get(handlers::rules))
        .route("/health", get(handlers::health))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
