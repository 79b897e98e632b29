//! Backend-independent parts of the filter-query compiler.
//!
//! - [`registry`] - Filter key to field definition lookup
//! - [`expression`] - Boolean expression parser for raw filter values
//! - [`range`] - Range atom parser
//!
//! Backends turn the parsed terms into their own query clauses; see
//! `backends::manticore::search` for the Manticore clause builders.
//!
//! # Example
//!
//! ```
//! use ideas_persistence::search::{FieldRegistry, expression};
//! use ideas_persistence::types::{BooleanTerm, FieldKind};
//!
//! let registry = FieldRegistry::default();
//! assert_eq!(registry.resolve("tags").unwrap().kind, FieldKind::TextMatch);
//!
//! let term = expression::parse("hiking&(river|lake)");
//! assert!(matches!(term, BooleanTerm::And(_)));
//! ```

pub mod expression;
pub mod range;
pub mod registry;

pub use registry::FieldRegistry;
