//! # ideas-rest - Idea Search REST API
//!
//! This crate exposes idea search and management over HTTP. Searches take
//! flat filter parameters with a small boolean syntax, compiled into a
//! Manticore query by `ideas-persistence`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ideas_rest::{create_app, ServerConfig};
//! use ideas_persistence::backends::manticore::{ManticoreBackend, ManticoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = ManticoreBackend::new(ManticoreConfig::default())?;
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | search | GET | `/idea?[filters]&limit=[n]&search_after=[token]` |
//! | create | POST | `/idea` |
//! | replace | PUT | `/idea/[id]` |
//! | delete | DELETE | `/idea/[id]` |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` |
//!
//! ## Filters
//!
//! | Parameter | Matches |
//! |-----------|---------|
//! | `keyword` | Full text across all indexed fields |
//! | `tags` | Tag text |
//! | `rewilding_mode` | Exact rewilding mode (`a,b` or `a|b` for any of) |
//! | `rewilding_location` | Exact location |
//! | `experience_hours` | Duration range: `[2,4]`, `<3`, `>8` |
//!
//! Values combine with `&` (all) and `|` (any), with one level of
//! parentheses: `tags=hiking&(lake|river)`.
//!
//! ## Error Handling
//!
//! Errors are JSON bodies `{"error": {"code", "message"}}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid_filter / invalid / bad_request | Unknown filter, failed validation, bad input |
//! | 404 | not_found | Idea not found |
//! | 500 | internal | Backend rejected the request |
//! | 503 | unavailable | Backend unreachable or timed out |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for search parameters and payloads
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit};
use http::{HeaderName, StatusCode};
use ideas_persistence::core::{Backend, SearchProvider};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: SearchProvider + Backend + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the idea routes, request tracing, timeouts, body limits, CORS
/// and request ids.
///
/// # Example
///
/// ```rust,ignore
/// use ideas_rest::{create_app_with_config, ServerConfig};
/// use ideas_persistence::backends::manticore::{ManticoreBackend, ManticoreConfig};
///
/// let backend = ManticoreBackend::new(ManticoreConfig::default())?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: SearchProvider + Backend + 'static,
{
    info!(
        backend = storage.backend_name(),
        "Creating REST API server"
    );

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone());

    // Build the router with all idea routes
    let router = routing::idea_routes::create_routes(state)
        .layer(DefaultBodyLimit::max(config.max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    let router = router.layer(service_builder);

    // Request ids wrap everything so the trace span sees them
    if config.enable_request_id {
        let header = HeaderName::from_static(REQUEST_ID_HEADER);
        router
            .layer(PropagateRequestIdLayer::new(header.clone()))
            .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ideas_server={level},ideas_rest={level},ideas_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
