//! Manticore Search backend implementation.
//!
//! Ideas live in a single Manticore index reached over the JSON/HTTP API.
//! The backend implements [`IdeaStorage`](crate::core::IdeaStorage) for
//! writes and [`SearchProvider`](crate::core::SearchProvider) for filtered,
//! weighted, scroll-paginated search.
//!
//! # Query Shape
//!
//! Filters compile to one top-level `bool.must` holding one clause per
//! filter:
//!
//! - full-text and tag filters become `match` clauses (`operator: and`)
//! - attribute filters become `equals` or `in`
//! - range filters become `range` clauses, each wrapped in `bool.should`
//!
//! Results are sorted by `id` ascending and paged with Manticore's native
//! scroll token.
//!
//! # Example
//!
//! ```ignore
//! use ideas_persistence::backends::manticore::{ManticoreBackend, ManticoreConfig};
//! use ideas_persistence::core::SearchProvider;
//! use ideas_persistence::types::{Filter, PageRequest};
//!
//! let backend = ManticoreBackend::new(ManticoreConfig::default())?;
//! let page = backend
//!     .search(&[Filter::new("tags", "hiking")], &PageRequest::default())
//!     .await?;
//! ```

mod backend;
pub mod search;
mod search_impl;
mod storage;

pub use backend::{ManticoreBackend, ManticoreConfig};
