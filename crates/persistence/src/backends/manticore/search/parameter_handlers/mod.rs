//! Field kind handlers for Manticore query building.
//!
//! Each module turns the [`BooleanTerm`] tree of one filter into a
//! [`QueryClause`]. `And` maps to `bool.must`, `Or` to `bool.should`, and each
//! literal to a kind-specific leaf. A literal the handler cannot use is logged
//! and dropped; a group left without clauses is dropped with it.

pub mod attribute;
pub mod full_text;
pub mod range;
pub mod text_match;

use tracing::debug;

use crate::error::SearchError;
use crate::types::{BooleanTerm, FieldDefinition, FieldKind};

use super::clause::QueryClause;

/// Builds the clause for one resolved field.
///
/// Returns `None` when every literal was dropped.
pub fn build_field_clause(field: &FieldDefinition, term: &BooleanTerm) -> Option<QueryClause> {
    match field.kind {
        FieldKind::FullText => full_text::build_clause(&field.name, term),
        FieldKind::TextMatch => text_match::build_clause(&field.name, term),
        FieldKind::Attribute => attribute::build_clause(&field.name, term),
        FieldKind::Range => range::build_clause(&field.name, term),
    }
}

/// Maps a term tree with a per-literal leaf builder.
pub(crate) fn build_tree<F>(term: &BooleanTerm, leaf: &F) -> Option<QueryClause>
where
    F: Fn(&str) -> Result<QueryClause, SearchError>,
{
    match term {
        BooleanTerm::Literal(value) => keep(leaf(value)),
        BooleanTerm::And(children) => combine(
            children.iter().filter_map(|c| build_tree(c, leaf)).collect(),
            QueryClause::must,
        ),
        BooleanTerm::Or(children) => combine(
            children.iter().filter_map(|c| build_tree(c, leaf)).collect(),
            QueryClause::should,
        ),
    }
}

/// Wraps surviving clauses in a group. A lone clause stands for itself.
pub(crate) fn combine(
    mut clauses: Vec<QueryClause>,
    group: fn(Vec<QueryClause>) -> QueryClause,
) -> Option<QueryClause> {
    match clauses.len() {
        0 => None,
        1 => clauses.pop(),
        _ => Some(group(clauses)),
    }
}

/// Drops a malformed literal, logging why.
pub(crate) fn keep(result: Result<QueryClause, SearchError>) -> Option<QueryClause> {
    match result {
        Ok(clause) => Some(clause),
        Err(e) => {
            debug!(error = %e, "Dropping malformed literal");
            None
        }
    }
}
