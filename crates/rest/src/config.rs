//! Server configuration for the idea REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `REST_SERVER_PORT` | 8080 | Server port |
//! | `REST_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `REST_LOG_LEVEL` | info | Log level |
//! | `REST_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `REST_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `REST_ENABLE_CORS` | true | Enable CORS |
//! | `REST_CORS_ORIGINS` | * | Allowed origins |
//! | `REST_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `REST_CORS_HEADERS` | Content-Type,Authorization,Accept,X-Request-Id | Allowed headers |
//! | `REST_DEFAULT_PAGE_SIZE` | 8 | Page size when `limit` is absent |
//! | `REST_MAX_PAGE_SIZE` | 100 | Upper bound for `limit` |
//! | `REST_SEARCH_TIMEOUT_MS` | 3000 | Deadline for one backend search call |
//! | `MANTICORE_URL` | http://localhost:9308 | Manticore HTTP listener |
//! | `MANTICORE_INDEX` | idea | Index holding ideas |
//! | `MANTICORE_TIMEOUT_MS` | 5000 | Backend request timeout |
//!
//! # Example
//!
//! ```rust
//! use ideas_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;
use ideas_persistence::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Server configuration for the idea REST API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "ideas")]
#[command(about = "Idea search and management server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "REST_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "REST_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "REST_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "REST_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "REST_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "REST_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "REST_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "REST_CORS_METHODS", default_value = "GET,POST,PUT,DELETE,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "REST_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept,X-Request-Id"
    )]
    pub cors_headers: String,

    /// Enable request ID tracking.
    #[arg(long, env = "REST_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,

    /// Default page size for search results.
    #[arg(long, env = "REST_DEFAULT_PAGE_SIZE", default_value = "8")]
    pub default_page_size: usize,

    /// Maximum page size for search results.
    #[arg(long, env = "REST_MAX_PAGE_SIZE", default_value = "100")]
    pub max_page_size: usize,

    /// Deadline for one backend search call, in milliseconds.
    #[arg(long, env = "REST_SEARCH_TIMEOUT_MS", default_value = "3000")]
    pub search_timeout_ms: u64,

    /// Manticore HTTP listener URL.
    #[arg(long, env = "MANTICORE_URL", default_value = "http://localhost:9308")]
    pub manticore_url: String,

    /// Manticore index holding ideas.
    #[arg(long, env = "MANTICORE_INDEX", default_value = "idea")]
    pub manticore_index: String,

    /// Manticore request timeout in milliseconds.
    #[arg(long, env = "MANTICORE_TIMEOUT_MS", default_value = "5000")]
    pub manticore_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept,X-Request-Id".to_string(),
            enable_request_id: true,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            search_timeout_ms: 3000,
            manticore_url: "http://localhost:9308".to_string(),
            manticore_index: "idea".to_string(),
            manticore_timeout_ms: 5000,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["ideas"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.max_page_size > MAX_PAGE_SIZE {
            errors.push(format!("Max page size cannot exceed {}", MAX_PAGE_SIZE));
        }

        if self.search_timeout_ms == 0 {
            errors.push("Search timeout cannot be 0".to_string());
        }

        if self.manticore_url.trim().is_empty() {
            errors.push("Manticore URL cannot be empty".to_string());
        }

        if self.manticore_index.trim().is_empty() {
            errors.push("Manticore index cannot be empty".to_string());
        }

        if self.manticore_timeout_ms == 0 {
            errors.push("Manticore timeout cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            enable_request_id: false,
            ..Default::default()
        }
    }
}
