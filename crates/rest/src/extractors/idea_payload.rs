//! Idea payload extractor.
//!
//! Extracts a [`NewIdea`] from a JSON request body and validates it before
//! the handler runs.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use ideas_persistence::error::ValidationError;
use ideas_persistence::types::NewIdea;

use crate::error::RestError;

/// Axum extractor for a validated idea payload.
///
/// # Example
///
/// ```rust,ignore
/// use ideas_rest::extractors::IdeaPayload;
///
/// async fn create_handler(IdeaPayload(idea): IdeaPayload) {
///     println!("Creating idea {}", idea.idea_id);
/// }
/// ```
#[derive(Debug)]
pub struct IdeaPayload(pub NewIdea);

impl IdeaPayload {
    /// Consumes the extractor and returns the inner payload.
    pub fn into_inner(self) -> NewIdea {
        self.0
    }
}

/// Error type for idea payload extraction failures.
#[derive(Debug, thiserror::Error)]
pub enum IdeaPayloadRejection {
    /// The body could not be read or parsed.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The content type is not JSON.
    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),

    /// The payload parsed but failed validation.
    #[error("Idea payload failed validation")]
    Invalid(Vec<ValidationError>),
}

impl IntoResponse for IdeaPayloadRejection {
    fn into_response(self) -> Response {
        let error = match self {
            IdeaPayloadRejection::Invalid(errors) => RestError::from(errors),
            other => RestError::BadRequest {
                message: other.to_string(),
            },
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for IdeaPayload
where
    S: Send + Sync,
{
    type Rejection = IdeaPayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !content_type.contains("json") {
            return Err(IdeaPayloadRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| IdeaPayloadRejection::InvalidJson(e.to_string()))?;

        let idea: NewIdea = serde_json::from_slice(&bytes)
            .map_err(|e| IdeaPayloadRejection::InvalidJson(e.to_string()))?;

        idea.validate().map_err(IdeaPayloadRejection::Invalid)?;

        Ok(IdeaPayload(idea))
    }
}
