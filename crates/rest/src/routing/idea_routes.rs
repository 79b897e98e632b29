//! Idea route configuration.

use axum::{
    Router,
    routing::{get, put},
};
use ideas_persistence::core::{Backend, SearchProvider};

use crate::handlers;
use crate::state::AppState;

/// Creates all idea REST API routes.
///
/// # Routes
///
/// ## System
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Ideas
/// - `GET /idea` - Search
/// - `POST /idea` - Create
/// - `PUT /idea/{id}` - Replace
/// - `DELETE /idea/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: SearchProvider + Backend + 'static,
{
    Router::new()
        // System routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Idea routes
        .route(
            "/idea",
            get(handlers::search_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/idea/{id}",
            put(handlers::update_handler::<S>).delete(handlers::delete_handler::<S>),
        )
        // State
        .with_state(state)
}
