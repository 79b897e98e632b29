//! Single-field text match handler for Manticore.

use crate::error::SearchError;
use crate::types::BooleanTerm;

use super::super::clause::QueryClause;
use super::build_tree;

/// Builds a text-match clause on `field`.
pub fn build_clause(field: &str, term: &BooleanTerm) -> Option<QueryClause> {
    build_tree(term, &|text: &str| {
        let text = text.trim();
        if text.is_empty() {
            return Err(SearchError::malformed(field, text, "empty match text"));
        }
        Ok(QueryClause::Match {
            field: field.to_string(),
            text: text.to_string(),
        })
    })
}
