//! Core idea storage trait.
//!
//! This module defines the [`IdeaStorage`] trait, which provides the write
//! operations for idea documents held in the search index.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::IdeaData;

/// Write operations for idea documents.
///
/// # Example
///
/// ```ignore
/// use ideas_persistence::core::IdeaStorage;
/// use ideas_persistence::types::NewIdea;
///
/// async fn example<S: IdeaStorage>(storage: &S, idea: NewIdea) -> StorageResult<()> {
///     let data = idea.into_data();
///     let id = storage.create(&data).await?;
///     storage.replace(id, &data).await?;
///     storage.delete(id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait IdeaStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Inserts a new document and returns its id.
    ///
    /// The document id is taken from `data.id`.
    async fn create(&self, data: &IdeaData) -> StorageResult<u64>;

    /// Replaces the document with the given id, creating it if absent.
    async fn replace(&self, id: u64, data: &IdeaData) -> StorageResult<()>;

    /// Deletes the document with the given id.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::NotFound` if no document has that id.
    async fn delete(&self, id: u64) -> StorageResult<()>;
}
