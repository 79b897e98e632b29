//! Core types for the persistence layer.
//!
//! - [`IdeaData`], [`NewIdea`], [`IdeaView`] - Idea records
//! - [`FieldDefinition`], [`Filter`], [`BooleanTerm`], [`RangeAtom`] - Search inputs
//! - [`PageRequest`] - Scroll pagination
//! - [`SearchResponse`] - A page of results
//!
//! # Example
//!
//! ```
//! use ideas_persistence::types::IdeaData;
//!
//! let mut idea = IdeaData::default();
//! idea.set_tags(["hiking", "river"]);
//! assert_eq!(idea.tags, "hiking,river");
//! assert_eq!(idea.tags(), vec!["hiking", "river"]);
//! ```

mod idea;
mod pagination;
mod search_params;

pub use idea::{IdeaData, IdeaView, NewIdea, SearchResponse, TAG_SEPARATOR, split_tags};
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use search_params::{
    BooleanTerm, FieldDefinition, FieldKind, Filter, RangeAtom, RangeBound, RangeOp,
    SortDirection, SortDirective,
};
