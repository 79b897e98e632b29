//! Common test utilities for REST API testing.
//!
//! - [`memory`] - In-memory storage implementing the persistence traits
//! - [`fixtures`] - Idea fixtures

#![allow(dead_code)]

pub mod fixtures;
pub mod memory;

use std::sync::Arc;

use axum_test::TestServer;
use ideas_rest::{AppState, ServerConfig};

use memory::MemoryStorage;

/// Creates a test server over a shared in-memory storage.
pub fn create_test_server() -> (TestServer, Arc<MemoryStorage>) {
    create_test_server_with_config(ServerConfig::for_testing())
}

/// Creates a test server with a custom configuration.
pub fn create_test_server_with_config(config: ServerConfig) -> (TestServer, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let state = AppState::new(Arc::clone(&storage), config);
    let app = ideas_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, storage)
}
