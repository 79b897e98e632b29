//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Search engine driver identity and health
//! - [`IdeaStorage`] - Create, replace and delete of idea documents
//! - [`SearchProvider`] - Filtered, paged search
//!
//! # Trait Hierarchy
//!
//! ```text
//! IdeaStorage
//!     └── SearchProvider
//! ```

mod backend;
mod search;
mod storage;

pub use backend::{Backend, BackendKind};
pub use search::SearchProvider;
pub use storage::IdeaStorage;
