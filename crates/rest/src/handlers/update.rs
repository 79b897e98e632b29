//! Update handler.
//!
//! `PUT [base]/idea/[id]`

use axum::{
    Json,
    extract::{Path, State},
};
use ideas_persistence::core::IdeaStorage;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::IdeaPayload;
use crate::state::AppState;

use super::parse_id;

/// Handler for replacing an idea.
///
/// The whole document is replaced; the path id wins over the body's id.
///
/// # Response
///
/// - `200 OK` - `{"id": n}`
/// - `400 Bad Request` - Non-numeric id, invalid JSON or failed validation
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    IdeaPayload(idea): IdeaPayload,
) -> RestResult<Json<Value>>
where
    S: IdeaStorage + Send + Sync,
{
    let id = parse_id(&id)?;
    debug!(id, "Processing update request");

    let mut data = idea.into_data();
    data.id = id;
    state.storage().replace(id, &data).await?;

    info!(id, "Idea replaced");

    Ok(Json(json!({ "id": id })))
}
