//! Search parameters extractor.
//!
//! Turns the query string of `GET /idea` into ordered filters plus paging
//! controls.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use ideas_persistence::types::Filter;
use tracing::debug;

use crate::error::RestError;

/// Carries a whole filter query string, URL-encoded.
pub const QUERY_PARAM: &str = "q";

/// Requested page size.
pub const LIMIT_PARAM: &str = "limit";

/// Continuation token from the previous page.
pub const SEARCH_AFTER_PARAM: &str = "search_after";

/// Axum extractor for idea search parameters.
///
/// Every query parameter except `q`, `limit` and `search_after` is a filter.
/// `q` may carry further filters as an encoded query string
/// (`q=keyword%3Dcamping%26tags%3Dlake`); those are decoded in place. When a
/// key appears more than once, the first value wins.
///
/// # Example
///
/// ```rust,ignore
/// use ideas_rest::extractors::SearchParams;
///
/// async fn search_handler(params: SearchParams) {
///     for filter in params.filters() {
///         println!("{} = {}", filter.key, filter.raw_value);
///     }
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchParams {
    filters: Vec<Filter>,
    limit: Option<i64>,
    search_after: Option<String>,
}

impl SearchParams {
    /// Creates empty search params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds search params from decoded query pairs, in request order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut result = Self::default();
        let mut limit_seen = false;

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                QUERY_PARAM => {
                    for (k, v) in url::form_urlencoded::parse(value.as_bytes()) {
                        result.push_filter(&k, &v);
                    }
                }
                LIMIT_PARAM => {
                    if !limit_seen {
                        limit_seen = true;
                        result.limit = value.trim().parse().ok();
                        if result.limit.is_none() {
                            debug!(limit = %value, "Ignoring non-numeric limit");
                        }
                    }
                }
                SEARCH_AFTER_PARAM => {
                    if result.search_after.is_none() && !value.is_empty() {
                        result.search_after = Some(value.to_string());
                    }
                }
                _ => result.push_filter(key, value),
            }
        }

        result
    }

    fn push_filter(&mut self, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }
        if self.filters.iter().any(|f| f.key == key) {
            debug!(key, "Ignoring repeated filter key");
            return;
        }
        self.filters.push(Filter::new(key, value));
    }

    /// Returns the filters in request order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Returns the requested page size, if it was numeric.
    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    /// Returns the continuation token.
    pub fn search_after(&self) -> Option<&str> {
        self.search_after.as_deref()
    }
}

impl<S> FromRequestParts<S> for SearchParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(
            |e| RestError::BadRequest {
                message: format!("Invalid query string: {}", e),
            },
        )?;
        Ok(Self::from_pairs(pairs))
    }
}
