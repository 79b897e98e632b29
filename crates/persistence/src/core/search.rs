//! Search provider trait.

use async_trait::async_trait;

use crate::core::IdeaStorage;
use crate::error::StorageResult;
use crate::types::{Filter, PageRequest, SearchResponse};

/// Filtered, paged search over idea documents.
///
/// Filters are compiled into a single backend query. Every filter key must be
/// registered; an unknown key fails the call with `SearchError::UnknownField`
/// before anything is sent to the backend.
#[async_trait]
pub trait SearchProvider: IdeaStorage {
    /// Executes a search.
    ///
    /// # Arguments
    ///
    /// * `filters` - Filters in caller order; all are ANDed together
    /// * `page` - Page size, continuation token and optional deadline
    async fn search(&self, filters: &[Filter], page: &PageRequest)
    -> StorageResult<SearchResponse>;
}
