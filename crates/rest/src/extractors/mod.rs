//! Axum extractors for idea requests.
//!
//! - [`SearchParams`] - Filters and paging controls from the query string
//! - [`IdeaPayload`] - Validated idea body

mod idea_payload;
mod search_params;

pub use idea_payload::{IdeaPayload, IdeaPayloadRejection};
pub use search_params::{LIMIT_PARAM, QUERY_PARAM, SEARCH_AFTER_PARAM, SearchParams};
