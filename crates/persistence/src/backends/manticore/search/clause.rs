//! Manticore query clauses.
//!
//! [`QueryClause`] is the compiled form of a filter set. It mirrors the
//! Manticore JSON query language one-to-one and serializes to it directly.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::types::RangeBound;

/// A node of the compiled boolean query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryClause {
    /// Matches every document.
    MatchAll,
    /// Full-text match; all words must occur.
    Match {
        /// Target field, or `*` for all text fields.
        field: String,
        /// Query text.
        text: String,
    },
    /// Exact attribute value.
    Equals {
        /// Target field.
        field: String,
        /// Value to compare.
        value: String,
    },
    /// Attribute value in a set.
    In {
        /// Target field.
        field: String,
        /// Accepted values.
        values: Vec<String>,
    },
    /// Numeric range; all bounds must hold.
    Range {
        /// Target field.
        field: String,
        /// Bounds.
        bounds: Vec<RangeBound>,
    },
    /// Boolean combination.
    Bool {
        /// Clauses that must all match.
        must: Vec<QueryClause>,
        /// Clauses of which at least one must match.
        should: Vec<QueryClause>,
    },
}

impl QueryClause {
    /// A `bool` clause with only `must` entries.
    pub fn must(clauses: Vec<QueryClause>) -> Self {
        QueryClause::Bool {
            must: clauses,
            should: Vec::new(),
        }
    }

    /// A `bool` clause with only `should` entries.
    pub fn should(clauses: Vec<QueryClause>) -> Self {
        QueryClause::Bool {
            must: Vec::new(),
            should: clauses,
        }
    }

    /// Renders the clause as Manticore query JSON.
    pub fn to_json(&self) -> Value {
        match self {
            QueryClause::MatchAll => json!({ "match_all": {} }),
            QueryClause::Match { field, text } => json!({
                "match": { field.as_str(): { "query": text, "operator": "and" } }
            }),
            QueryClause::Equals { field, value } => json!({
                "equals": { field.as_str(): value }
            }),
            QueryClause::In { field, values } => json!({
                "in": { field.as_str(): values }
            }),
            QueryClause::Range { field, bounds } => {
                let mut ops = Map::new();
                for bound in bounds {
                    ops.insert(bound.op.as_str().to_string(), json!(bound.value));
                }
                json!({ "range": { field.as_str(): ops } })
            }
            QueryClause::Bool { must, should } => {
                let mut bool_query = Map::new();
                if !must.is_empty() {
                    bool_query.insert(
                        "must".to_string(),
                        Value::Array(must.iter().map(QueryClause::to_json).collect()),
                    );
                }
                if !should.is_empty() {
                    bool_query.insert(
                        "should".to_string(),
                        Value::Array(should.iter().map(QueryClause::to_json).collect()),
                    );
                }
                json!({ "bool": bool_query })
            }
        }
    }
}

impl Serialize for QueryClause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
