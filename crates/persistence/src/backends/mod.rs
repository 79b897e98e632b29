//! Search backend implementations.
//!
//! Each backend implements the storage traits from [`crate::core`] and is
//! gated behind a feature flag.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Manticore | `manticore` (default) | Manticore Search over its JSON/HTTP API |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "manticore")]
//! use ideas_persistence::backends::manticore::{ManticoreBackend, ManticoreConfig};
//!
//! # #[cfg(feature = "manticore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = ManticoreBackend::new(ManticoreConfig {
//!     url: "http://localhost:9308".to_string(),
//!     ..Default::default()
//! })?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "manticore")]
pub mod manticore;
