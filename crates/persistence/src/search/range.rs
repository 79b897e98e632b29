//! Range atom parser.
//!
//! Recognizes exactly three forms, checked in this order:
//!
//! | Token | Bounds |
//! |-------|--------|
//! | `[a,b]` | `gte a`, `lte b` |
//! | `<x` | `lt x` |
//! | `>x` | `gt x` |
//!
//! There are no `<=` / `>=` forms. A bound that is not a finite number makes
//! the whole atom malformed.

use crate::error::SearchError;
use crate::types::{RangeAtom, RangeBound, RangeOp};

/// Parses a range token for `field`.
pub fn parse(field: &str, token: &str) -> Result<RangeAtom, SearchError> {
    let token = token.trim();

    if let Some(inner) = token.strip_prefix('[') {
        let inner = inner.strip_suffix(']').ok_or_else(|| {
            SearchError::malformed(field, token, "missing closing bracket")
        })?;
        let (lo, hi) = inner.split_once(',').ok_or_else(|| {
            SearchError::malformed(field, token, "expected two comma-separated bounds")
        })?;
        if hi.contains(',') {
            return Err(SearchError::malformed(
                field,
                token,
                "expected two comma-separated bounds",
            ));
        }
        return Ok(RangeAtom {
            bounds: vec![
                RangeBound::new(RangeOp::GreaterOrEqual, parse_number(field, token, lo)?),
                RangeBound::new(RangeOp::LessOrEqual, parse_number(field, token, hi)?),
            ],
        });
    }

    if let Some(value) = token.strip_prefix('<') {
        return Ok(RangeAtom {
            bounds: vec![RangeBound::new(
                RangeOp::LessThan,
                parse_number(field, token, value)?,
            )],
        });
    }

    if let Some(value) = token.strip_prefix('>') {
        return Ok(RangeAtom {
            bounds: vec![RangeBound::new(
                RangeOp::GreaterThan,
                parse_number(field, token, value)?,
            )],
        });
    }

    Err(SearchError::malformed(
        field,
        token,
        "expected [a,b], <x or >x",
    ))
}

fn parse_number(field: &str, token: &str, value: &str) -> Result<f64, SearchError> {
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        Ok(_) => Err(SearchError::malformed(field, token, "bound must be finite")),
        Err(_) => Err(SearchError::malformed(
            field,
            token,
            format!("'{}' is not a number", value),
        )),
    }
}
