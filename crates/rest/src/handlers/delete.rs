//! Delete handler.
//!
//! `DELETE [base]/idea/[id]`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ideas_persistence::core::IdeaStorage;
use tracing::{debug, info};

use crate::error::RestResult;
use crate::state::AppState;

use super::parse_id;

/// Handler for deleting an idea.
///
/// # Response
///
/// - `204 No Content` - Idea deleted
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No idea with that id
///
/// # Example
///
/// ```http
/// DELETE /idea/123 HTTP/1.1
/// ```
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: IdeaStorage + Send + Sync,
{
    let id = parse_id(&id)?;
    debug!(id, "Processing delete request");

    state.storage().delete(id).await?;

    info!(id, "Idea deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
