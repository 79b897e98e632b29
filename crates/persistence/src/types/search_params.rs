//! Search parameter types.
//!
//! These types describe the inputs of the filter-query compiler: the kind of
//! each searchable field, the filters supplied by a caller, the boolean term
//! tree produced from a raw filter value, and the range bounds parsed out of
//! range literals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a searchable field, which selects the clause-building rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Full-text search across all indexed text.
    FullText,
    /// Text match on a single field.
    TextMatch,
    /// Exact attribute match (`equals` / `in`).
    Attribute,
    /// Numeric range.
    Range,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::FullText => write!(f, "full_text"),
            FieldKind::TextMatch => write!(f, "text_match"),
            FieldKind::Attribute => write!(f, "attribute"),
            FieldKind::Range => write!(f, "range"),
        }
    }
}

/// Definition of a searchable field.
///
/// `key` is the external filter parameter name; `name` is the search-engine
/// field it targets. The two may differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// External filter key.
    pub key: String,
    /// Target search field.
    pub name: String,
    /// Field kind.
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// Creates a new field definition.
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
        }
    }
}

/// A single filter supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// The filter key.
    pub key: String,
    /// The raw, unparsed value.
    pub raw_value: String,
}

impl Filter {
    /// Creates a new filter.
    pub fn new(key: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// A parsed boolean expression over literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooleanTerm {
    /// An atomic value.
    Literal(String),
    /// All children must hold.
    And(Vec<BooleanTerm>),
    /// At least one child must hold.
    Or(Vec<BooleanTerm>),
}

impl BooleanTerm {
    /// Creates a literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        BooleanTerm::Literal(value.into())
    }
}

/// Comparison operator of a range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeOp {
    /// Strictly less than.
    #[serde(rename = "lt")]
    LessThan,
    /// Less than or equal.
    #[serde(rename = "lte")]
    LessOrEqual,
    /// Strictly greater than.
    #[serde(rename = "gt")]
    GreaterThan,
    /// Greater than or equal.
    #[serde(rename = "gte")]
    GreaterOrEqual,
}

impl RangeOp {
    /// Returns the backend keyword for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOp::LessThan => "lt",
            RangeOp::LessOrEqual => "lte",
            RangeOp::GreaterThan => "gt",
            RangeOp::GreaterOrEqual => "gte",
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    /// Comparison operator.
    pub op: RangeOp,
    /// Bound value.
    pub value: f64,
}

impl RangeBound {
    /// Creates a new bound.
    pub fn new(op: RangeOp, value: f64) -> Self {
        Self { op, value }
    }
}

/// A parsed range token: one or two bounds that must all hold.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeAtom {
    /// The bounds, combined with AND.
    pub bounds: Vec<RangeBound>,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

impl SortDirection {
    /// Returns the backend keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A sort directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Ascending sort on `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `field`.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}
