//! Application state for the idea REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;
use std::time::Duration;

use ideas_persistence::types::PageRequest;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type
///
/// # Example
///
/// ```rust,ignore
/// use ideas_rest::{AppState, ServerConfig};
/// use ideas_persistence::backends::manticore::{ManticoreBackend, ManticoreConfig};
/// use std::sync::Arc;
///
/// let backend = ManticoreBackend::new(ManticoreConfig::default())?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Builds a page request from a raw `limit` and scroll token.
    ///
    /// The request carries the configured search deadline.
    pub fn page_request(&self, limit: Option<i64>, scroll_token: Option<&str>) -> PageRequest {
        let page = PageRequest::resolve(
            limit,
            self.config.default_page_size,
            self.config.max_page_size,
        )
        .with_timeout(Duration::from_millis(self.config.search_timeout_ms));
        match scroll_token {
            Some(token) => page.with_scroll_token(token),
            None => page,
        }
    }
}
