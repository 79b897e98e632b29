//! Manticore query compilation and response mapping.

pub mod clause;
pub mod parameter_handlers;
pub mod query_builder;
pub mod result_mapper;

pub use clause::QueryClause;
pub use query_builder::{QueryBuilder, SearchRequest};
pub use result_mapper::map_response;
