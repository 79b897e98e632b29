//! Manticore search request builder.
//!
//! Compiles caller filters into a [`SearchRequest`]: every key is resolved
//! against the [`FieldRegistry`], each field's clause is built by its kind
//! handler, and all field clauses are ANDed under the top-level `bool.must`.
//! Ranking weights, a stable `id` ascending sort and scroll pagination are
//! attached.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::error::SearchError;
use crate::search::{FieldRegistry, expression};
use crate::types::{FieldDefinition, Filter, PageRequest, SortDirective};

use super::clause::QueryClause;
use super::parameter_handlers::build_field_clause;

/// Field used as the stable sort key.
pub const SORT_FIELD: &str = "id";

/// A compiled search request, ready to be sent to `POST /search`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// The index to search.
    pub index: String,
    /// The compiled query.
    pub query: QueryClause,
    /// Sort order.
    pub sort: Vec<SortDirective>,
    /// Ranking weight per field.
    pub weights: BTreeMap<String, i64>,
    /// Page size.
    pub page_size: usize,
    /// Continuation token from the previous page.
    pub scroll_token: Option<String>,
}

impl SearchRequest {
    /// Renders the request body.
    pub fn to_body(&self) -> Value {
        let sort: Vec<Value> = self
            .sort
            .iter()
            .map(|s| json!({ s.field.as_str(): s.direction.as_str() }))
            .collect();

        let mut options = Map::new();
        if !self.weights.is_empty() {
            options.insert("field_weights".to_string(), json!(self.weights));
        }
        let scroll = match &self.scroll_token {
            Some(token) => json!(token),
            None => json!(true),
        };
        options.insert("scroll".to_string(), scroll);

        json!({
            "index": self.index,
            "query": self.query,
            "sort": sort,
            "options": options,
            "limit": self.page_size,
        })
    }
}

/// Builds Manticore search requests from filters.
pub struct QueryBuilder<'a> {
    registry: &'a FieldRegistry,
    index: &'a str,
    weights: &'a BTreeMap<String, i64>,
}

impl<'a> QueryBuilder<'a> {
    /// Creates a new query builder.
    pub fn new(
        registry: &'a FieldRegistry,
        index: &'a str,
        weights: &'a BTreeMap<String, i64>,
    ) -> Self {
        Self {
            registry,
            index,
            weights,
        }
    }

    /// Compiles `filters` into a search request.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownField`] for the first key not in the
    /// registry. No request is produced in that case.
    pub fn build(&self, filters: &[Filter], page: &PageRequest) -> Result<SearchRequest, SearchError> {
        let resolved = self.resolve(filters)?;

        let mut must = Vec::new();
        for (field, filter) in resolved {
            let raw = filter.raw_value.trim();
            if raw.is_empty() {
                debug!(key = %filter.key, "Skipping empty filter");
                continue;
            }
            let term = expression::parse(raw);
            match build_field_clause(field, &term) {
                Some(clause) => must.push(clause),
                None => debug!(
                    key = %filter.key,
                    value = %filter.raw_value,
                    "Filter contributed no clause"
                ),
            }
        }

        let query = if must.is_empty() {
            QueryClause::MatchAll
        } else {
            QueryClause::must(must)
        };

        Ok(SearchRequest {
            index: self.index.to_string(),
            query,
            sort: vec![SortDirective::ascending(SORT_FIELD)],
            weights: self.weights.clone(),
            page_size: page.effective_page_size(),
            scroll_token: page.scroll_token.clone(),
        })
    }

    /// Resolves every filter key before any clause is built.
    fn resolve<'f>(
        &self,
        filters: &'f [Filter],
    ) -> Result<Vec<(&'a FieldDefinition, &'f Filter)>, SearchError> {
        filters
            .iter()
            .map(|filter| Ok((self.registry.resolve(&filter.key)?, filter)))
            .collect()
    }
}
