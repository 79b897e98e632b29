//! Attribute handler for Manticore.
//!
//! Attribute literals may list several values separated by `,`. Both `,` and
//! `|` express alternatives and normalize to the same clause: one value gives
//! `equals`, several give `in`.
//!
//! ```text
//! slow        => equals(slow)
//! slow,fast   => in[slow, fast]
//! slow|fast   => in[slow, fast]
//! a&(b|c,d)   => must[equals(a), in[b, c, d]]
//! ```

use crate::error::SearchError;
use crate::types::BooleanTerm;

use super::super::clause::QueryClause;
use super::{combine, keep};

const VALUE_SEPARATOR: char = ',';

/// Builds an attribute clause on `field`.
pub fn build_clause(field: &str, term: &BooleanTerm) -> Option<QueryClause> {
    match term {
        BooleanTerm::Literal(value) => keep(values_clause(field, value, split_values(value))),
        BooleanTerm::Or(children) => {
            let mut values = Vec::new();
            let mut nested = Vec::new();
            for child in children {
                match child {
                    BooleanTerm::Literal(value) => {
                        for v in split_values(value) {
                            if !values.contains(&v) {
                                values.push(v);
                            }
                        }
                    }
                    other => nested.extend(build_clause(field, other)),
                }
            }
            let mut alternatives = Vec::new();
            if !values.is_empty() {
                alternatives.extend(keep(values_clause(field, "", values)));
            }
            alternatives.extend(nested);
            combine(alternatives, QueryClause::should)
        }
        BooleanTerm::And(children) => combine(
            children
                .iter()
                .filter_map(|c| build_clause(field, c))
                .collect(),
            QueryClause::must,
        ),
    }
}

/// Splits a literal into trimmed, non-empty, distinct values.
fn split_values(literal: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in literal.split(VALUE_SEPARATOR).map(str::trim) {
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

fn values_clause(
    field: &str,
    literal: &str,
    mut values: Vec<String>,
) -> Result<QueryClause, SearchError> {
    match values.len() {
        0 => Err(SearchError::malformed(field, literal, "no attribute value")),
        1 => Ok(QueryClause::Equals {
            field: field.to_string(),
            value: values.remove(0),
        }),
        _ => Ok(QueryClause::In {
            field: field.to_string(),
            values,
        }),
    }
}
