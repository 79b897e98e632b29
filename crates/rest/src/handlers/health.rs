//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and load
//! balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ideas_persistence::core::Backend;
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Pings the search backend.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Server and backend are healthy
/// - `503 Service Unavailable` - Backend health check failed
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: Backend,
{
    debug!("Processing health check request");

    let backend = state.storage();
    let timestamp = chrono::Utc::now().to_rfc3339();

    match backend.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "healthy",
                "backend": backend.name(),
                "timestamp": timestamp
            })),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unhealthy",
                    "backend": backend.name(),
                    "timestamp": timestamp,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: Backend,
{
    debug!("Processing readiness check request");

    let backend = state.storage();
    let (status, storage) = match backend.health_check().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let body = serde_json::json!({
        "status": if status.is_success() { "ready" } else { "not_ready" },
        "backend": backend.name(),
        "checks": {
            "storage": storage
        }
    });

    (status, Json(body)).into_response()
}
