//! Search handler.
//!
//! `GET [base]/idea?[filters]&limit=[n]&search_after=[token]`

use axum::{Json, extract::State};
use ideas_persistence::core::SearchProvider;
use ideas_persistence::types::{IdeaView, SearchResponse};
use serde::Serialize;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::SearchParams;
use crate::state::AppState;

/// A page of search results as returned to clients.
#[derive(Debug, Serialize)]
pub struct SearchPage {
    /// Matching ideas in backend order.
    pub items: Vec<IdeaView>,
    /// Total number of matches.
    pub total: i64,
    /// Token for the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_after: Option<String>,
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            items: response.items,
            total: response.total,
            search_after: response.next_scroll_token,
        }
    }
}

/// Handler for idea search.
///
/// # Response
///
/// - `200 OK` - `{"items": [...], "total": n, "search_after": "..."}`
/// - `400 Bad Request` - Unknown filter key
/// - `503 Service Unavailable` - Search backend unreachable
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    params: SearchParams,
) -> RestResult<Json<SearchPage>>
where
    S: SearchProvider + Send + Sync,
{
    let page = state.page_request(params.limit(), params.search_after());

    debug!(
        filters = params.filters().len(),
        page_size = page.page_size,
        continuation = page.is_continuation(),
        "Processing search request"
    );

    let response = state.storage().search(params.filters(), &page).await?;

    Ok(Json(response.into()))
}
