//! Ideas Persistence Layer
//!
//! This crate stores travel ideas in a search index and compiles caller
//! filters into search engine queries.
//!
//! # Features
//!
//! - **Filter Compilation**: Flat key/value filters with `&`, `|` and one
//!   level of parentheses, resolved against a field registry
//! - **Field Kinds**: Full-text, single-field text match, exact attribute and
//!   numeric range
//! - **Weighted Ranking**: Per-field weights passed to the engine
//! - **Scroll Pagination**: Stable `id` order with opaque continuation tokens
//!
//! # Backend Features
//!
//! - `manticore` (default) - Manticore Search over its JSON/HTTP API
//!
//! # Architecture
//!
//! - [`types`] - Idea records, filters, pagination
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage and search traits
//! - [`search`] - Backend-independent parsing (registry, expressions, ranges)
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use ideas_persistence::search::FieldRegistry;
//! use ideas_persistence::types::{FieldKind, NewIdea};
//!
//! let registry = FieldRegistry::default();
//! let field = registry.resolve("experience_hours").unwrap();
//! assert_eq!(field.name, "experience_duration");
//! assert_eq!(field.kind, FieldKind::Range);
//!
//! let idea = NewIdea {
//!     idea_id: 3,
//!     itinerary_name: "Lake loop".to_string(),
//!     attraction_name: "Sun Moon Lake".to_string(),
//!     tags: vec!["cycling".to_string(), "lake".to_string()],
//!     wild_mode: "slow".to_string(),
//!     attraction_location: "Nantou".to_string(),
//!     experience_duration: 5.0,
//! };
//! assert!(idea.validate().is_ok());
//! assert_eq!(idea.into_data().tags, "cycling,lake");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Filter, IdeaData, IdeaView, NewIdea, PageRequest, SearchResponse};

// Re-export core traits
pub use core::{Backend, BackendKind, IdeaStorage, SearchProvider};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
