//! HTTP request handlers for idea interactions.
//!
//! - [`search`] - Search ideas with filters
//! - [`create`] - Create an idea
//! - [`update`] - Replace an idea
//! - [`delete`] - Delete an idea
//! - [`health`] - Health check endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod search;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use search::search_handler;
pub use update::update_handler;

use crate::error::RestError;

/// Parses an idea id from a path segment.
pub(crate) fn parse_id(raw: &str) -> Result<u64, RestError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RestError::BadRequest {
            message: format!("Invalid id: {}", raw),
        }),
    }
}
