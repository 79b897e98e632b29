//! Boolean filter expression parser.
//!
//! Raw filter values use a one-level grammar: `&` separates AND segments, `|`
//! separates OR alternatives, and a segment may be wrapped in one pair of
//! parentheses to group its alternatives.
//!
//! ```text
//! a           => Literal(a)
//! a|b         => Or[a, b]
//! a&b         => And[a, b]
//! a&(b|c)     => And[a, Or[b, c]]
//! ```
//!
//! Deeper nesting is not supported, and parentheses are only stripped from
//! AND segments. Empty segments (`a&`) are kept as empty literals; clause
//! builders treat them as malformed.

use crate::types::BooleanTerm;

const AND: char = '&';
const OR: char = '|';

/// Parses a raw filter value into a boolean term tree.
///
/// A value without operators is returned unchanged as a single literal.
pub fn parse(raw: &str) -> BooleanTerm {
    if raw.contains(AND) {
        let segments = raw.split(AND).map(|segment| parse_segment(segment.trim())).collect();
        BooleanTerm::And(segments)
    } else if raw.contains(OR) {
        parse_alternatives(raw)
    } else {
        BooleanTerm::Literal(raw.to_string())
    }
}

/// Parses one AND segment.
fn parse_segment(segment: &str) -> BooleanTerm {
    let segment = strip_group(segment);
    if segment.contains(OR) {
        parse_alternatives(segment)
    } else {
        BooleanTerm::literal(segment)
    }
}

fn parse_alternatives(value: &str) -> BooleanTerm {
    BooleanTerm::Or(
        value
            .split(OR)
            .map(|alt| BooleanTerm::literal(alt.trim()))
            .collect(),
    )
}

/// Strips one enclosing layer of parentheses.
fn strip_group(value: &str) -> &str {
    let value = value.strip_prefix('(').unwrap_or(value);
    value.strip_suffix(')').unwrap_or(value).trim()
}
