//! Route configuration for the idea REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod idea_routes;

pub use idea_routes::create_routes;
