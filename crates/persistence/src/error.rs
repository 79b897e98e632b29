//! Error types for the persistence layer.
//!
//! This module defines all error types used throughout the persistence layer,
//! following a hierarchy that separates resource errors, validation errors,
//! search compilation errors, and backend errors.
//!
//! Search compilation distinguishes two failure modes:
//!
//! - [`SearchError::UnknownField`] is fail-hard: it aborts the whole compilation
//!   and no partial request is produced.
//! - [`SearchError::MalformedLiteral`] is fail-soft: clause builders drop the
//!   offending literal and keep going.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Search compilation errors
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to document state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested document was not found.
    #[error("document not found: {index}/{id}")]
    NotFound { index: String, id: u64 },
}

/// Validation errors for ideas and field definitions.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The idea payload failed validation.
    #[error("invalid idea: {message}")]
    InvalidIdea { message: String },

    /// A required field is missing.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    /// A field registry entry is invalid.
    #[error("invalid field definition '{key}': {message}")]
    InvalidFieldDefinition { key: String, message: String },
}

/// Errors raised while compiling filters into a backend query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The filter key is not registered.
    #[error("unknown search field: {key}")]
    UnknownField { key: String },

    /// A literal could not be turned into a clause.
    #[error("malformed literal '{literal}' for field '{field}': {reason}")]
    MalformedLiteral {
        field: String,
        literal: String,
        reason: String,
    },
}

impl SearchError {
    /// Convenience constructor for [`SearchError::MalformedLiteral`].
    pub fn malformed(
        field: impl Into<String>,
        literal: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SearchError::MalformedLiteral {
            field: field.into(),
            literal: literal.into(),
            reason: reason.into(),
        }
    }
}

/// Backend-specific errors.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// The request exceeded its deadline.
    #[error("request to {backend_name} timed out")]
    Timeout { backend_name: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend rejected the query.
    #[error("query execution failed ({status}): {message}")]
    QueryError { status: u16, message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

impl BackendError {
    /// Returns true if the error means the backend could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            BackendError::Unavailable { .. }
                | BackendError::ConnectionFailed { .. }
                | BackendError::Timeout { .. }
        )
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
