//! Create handler.
//!
//! `POST [base]/idea`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ideas_persistence::core::IdeaStorage;
use serde_json::json;
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::IdeaPayload;
use crate::state::AppState;

/// Handler for creating an idea.
///
/// The idea id doubles as the document id.
///
/// # Response
///
/// - `201 Created` - `{"id": n}`
/// - `400 Bad Request` - Invalid JSON or failed validation
///
/// # Example
///
/// ```http
/// POST /idea HTTP/1.1
/// Content-Type: application/json
///
/// {"idea_id": 7, "itinerary_name": "Coastal walk", "attraction_name": "Seal colony",
///  "tags": ["hiking"], "wild_mode": "slow", "attraction_location": "Hualien",
///  "experience_duration": 3}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    IdeaPayload(idea): IdeaPayload,
) -> RestResult<Response>
where
    S: IdeaStorage + Send + Sync,
{
    debug!(idea_id = idea.idea_id, "Processing create request");

    let data = idea.into_data();
    let id = state.storage().create(&data).await?;

    info!(id, "Idea created");

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))).into_response())
}
