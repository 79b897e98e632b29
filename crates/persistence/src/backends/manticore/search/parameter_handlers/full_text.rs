//! Full-text handler for Manticore.
//!
//! Literals become `match` clauses on the registered field, which for the
//! `keyword` filter is `*` (all indexed text).

use crate::error::SearchError;
use crate::types::BooleanTerm;

use super::super::clause::QueryClause;
use super::build_tree;

/// Builds a full-text clause.
pub fn build_clause(field: &str, term: &BooleanTerm) -> Option<QueryClause> {
    build_tree(term, &|text: &str| {
        let text = text.trim();
        if text.is_empty() {
            return Err(SearchError::malformed(field, text, "empty full-text query"));
        }
        Ok(QueryClause::Match {
            field: field.to_string(),
            text: text.to_string(),
        })
    })
}
