//! Backend abstraction for search engine drivers.
//!
//! This module defines the [`Backend`] trait, implemented by each search
//! engine driver to report its identity and health.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Manticore Search over its JSON/HTTP API.
    Manticore,
    /// Custom or unknown backend.
    Custom(&'static str),
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Manticore => write!(f, "manticore"),
            BackendKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A search engine driver.
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the backend kind.
    fn kind(&self) -> BackendKind;

    /// Returns a short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Checks that the backend is reachable and answering.
    async fn health_check(&self) -> Result<(), BackendError>;
}
