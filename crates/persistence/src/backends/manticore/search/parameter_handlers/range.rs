//! Range handler for Manticore.
//!
//! Every literal is a range atom (`[a,b]`, `<x`, `>x`). A `[a,b]` atom becomes
//! one `range` object carrying both `gte` and `lte`.
//!
//! Manticore ignores `should` next to `must` in the same `bool`, so every
//! must-level range entry is placed inside its own `bool.should`, a singleton
//! for a lone atom:
//!
//! ```text
//! [2,4]          => should[range(gte 2, lte 4)]
//! <2|>8          => should[range(lt 2), range(gt 8)]
//! [0,10]&(<2|>8) => must[should[range(gte 0, lte 10)], should[range(lt 2), range(gt 8)]]
//! ```

use crate::search::range as range_atom;
use crate::types::BooleanTerm;

use super::super::clause::QueryClause;
use super::{combine, keep};

/// Builds a range clause on `field`.
pub fn build_clause(field: &str, term: &BooleanTerm) -> Option<QueryClause> {
    match term {
        BooleanTerm::Literal(token) => atom(field, token).map(|r| QueryClause::should(vec![r])),
        BooleanTerm::Or(children) => alternatives(field, children),
        BooleanTerm::And(children) => combine(
            children
                .iter()
                .filter_map(|c| build_clause(field, c))
                .collect(),
            QueryClause::must,
        ),
    }
}

fn alternatives(field: &str, children: &[BooleanTerm]) -> Option<QueryClause> {
    let atoms: Vec<QueryClause> = children
        .iter()
        .filter_map(|child| match child {
            BooleanTerm::Literal(token) => atom(field, token),
            other => build_clause(field, other),
        })
        .collect();
    if atoms.is_empty() {
        None
    } else {
        Some(QueryClause::should(atoms))
    }
}

fn atom(field: &str, token: &str) -> Option<QueryClause> {
    keep(
        range_atom::parse(field, token).map(|parsed| QueryClause::Range {
            field: field.to_string(),
            bounds: parsed.bounds,
        }),
    )
}
