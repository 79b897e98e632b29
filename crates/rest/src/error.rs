//! Error types for the idea REST API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes:
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | UnknownField | 400 | invalid_filter |
//! | ValidationError | 400 | invalid |
//! | NotFound | 404 | not_found |
//! | Unavailable / ConnectionFailed / Timeout | 503 | unavailable |
//! | Other backend errors | 500 | internal |
//!
//! Every error body has the shape:
//!
//! ```json
//! {"error": {"code": "not_found", "message": "Idea 12 not found"}}
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ideas_persistence::error::{
    BackendError, ResourceError, SearchError, StorageError, ValidationError,
};
use std::fmt;
use tracing::{error, warn};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Idea not found (HTTP 404).
    NotFound {
        /// The idea id.
        id: u64,
    },

    /// Bad request - malformed input (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// A filter key is not recognized (HTTP 400).
    InvalidFilter {
        /// Error message.
        message: String,
    },

    /// The payload failed validation (HTTP 400).
    Validation {
        /// Every violation found.
        messages: Vec<String>,
    },

    /// The search backend cannot be reached (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => write!(f, "Idea {} not found", id),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::InvalidFilter { message } => write!(f, "Invalid filter: {}", message),
            RestError::Validation { messages } => {
                write!(f, "Validation failed: {}", messages.join("; "))
            }
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. }
            | RestError::InvalidFilter { .. }
            | RestError::Validation { .. } => StatusCode::BAD_REQUEST,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } => "not_found",
            RestError::BadRequest { .. } => "bad_request",
            RestError::InvalidFilter { .. } => "invalid_filter",
            RestError::Validation { .. } => "invalid",
            RestError::ServiceUnavailable { .. } => "unavailable",
            RestError::InternalError { .. } => "internal",
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        if let RestError::Validation { messages } = &self {
            body["error"]["details"] = serde_json::json!(messages);
        }
        (status, Json(body)).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Search(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { id, .. } => RestError::NotFound { id },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::Validation {
            messages: vec![err.to_string()],
        }
    }
}

impl From<Vec<ValidationError>> for RestError {
    fn from(errors: Vec<ValidationError>) -> Self {
        RestError::Validation {
            messages: errors.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<SearchError> for RestError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::UnknownField { .. } => RestError::InvalidFilter {
                message: err.to_string(),
            },
            SearchError::MalformedLiteral { .. } => RestError::BadRequest {
                message: err.to_string(),
            },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        if err.is_unavailable() {
            warn!(error = %err, "Search backend unavailable");
            RestError::ServiceUnavailable {
                message: err.to_string(),
            }
        } else {
            error!(error = %err, "Search backend error");
            RestError::InternalError {
                message: err.to_string(),
            }
        }
    }
}

/// Result type for REST API operations.
pub type RestResult<T> = Result<T, RestError>;
