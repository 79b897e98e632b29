//! SearchProvider implementation for the Manticore backend.

use async_trait::async_trait;

use crate::core::SearchProvider;
use crate::error::StorageResult;
use crate::types::{Filter, PageRequest, SearchResponse};

use super::backend::ManticoreBackend;
use super::search::{QueryBuilder, map_response};

#[async_trait]
impl SearchProvider for ManticoreBackend {
    async fn search(&self, filters: &[Filter], page: &PageRequest) -> StorageResult<SearchResponse> {
        let request = QueryBuilder::new(self.registry(), self.index(), &self.config().field_weights)
            .build(filters, page)?;

        let body = self
            .post_json("search", &request.to_body(), page.timeout)
            .await?;
        let response = map_response(&body);

        tracing::debug!(
            filters = filters.len(),
            returned = response.items.len(),
            total = response.total,
            continuation = page.is_continuation(),
            "Search completed"
        );

        Ok(response)
    }
}
