//! In-memory idea storage for REST API tests.
//!
//! Resolves filter keys against the default field registry like the real
//! backend, but returns every stored idea in id order. Scroll tokens are the
//! last id of the previous page.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use ideas_persistence::core::{Backend, BackendKind, IdeaStorage, SearchProvider};
use ideas_persistence::error::{BackendError, ResourceError, StorageResult};
use ideas_persistence::search::FieldRegistry;
use ideas_persistence::types::{Filter, IdeaData, IdeaView, PageRequest, SearchResponse};

/// A search call as seen by the storage.
#[derive(Debug, Clone)]
pub struct RecordedSearch {
    pub filters: Vec<Filter>,
    pub page: PageRequest,
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    registry: FieldRegistry,
    ideas: Mutex<BTreeMap<u64, IdeaData>>,
    searches: Mutex<Vec<RecordedSearch>>,
    down: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every backend call fail as unreachable.
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn insert(&self, data: IdeaData) {
        self.ideas.lock().unwrap().insert(data.id, data);
    }

    pub fn get(&self, id: u64) -> Option<IdeaData> {
        self.ideas.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.ideas.lock().unwrap().len()
    }

    pub fn last_search(&self) -> Option<RecordedSearch> {
        self.searches.lock().unwrap().last().cloned()
    }

    fn check_up(&self) -> Result<(), BackendError> {
        if self.down.load(Ordering::SeqCst) {
            Err(BackendError::Unavailable {
                backend_name: "memory".to_string(),
                message: "connection refused".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl IdeaStorage for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, data: &IdeaData) -> StorageResult<u64> {
        self.check_up()?;
        self.insert(data.clone());
        Ok(data.id)
    }

    async fn replace(&self, id: u64, data: &IdeaData) -> StorageResult<()> {
        self.check_up()?;
        let mut data = data.clone();
        data.id = id;
        self.insert(data);
        Ok(())
    }

    async fn delete(&self, id: u64) -> StorageResult<()> {
        self.check_up()?;
        match self.ideas.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(ResourceError::NotFound {
                index: "idea".to_string(),
                id,
            }
            .into()),
        }
    }
}

#[async_trait]
impl SearchProvider for MemoryStorage {
    async fn search(&self, filters: &[Filter], page: &PageRequest) -> StorageResult<SearchResponse> {
        for filter in filters {
            self.registry.resolve(&filter.key)?;
        }
        self.check_up()?;

        self.searches.lock().unwrap().push(RecordedSearch {
            filters: filters.to_vec(),
            page: page.clone(),
        });

        let after: u64 = page
            .scroll_token
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or(0);

        let ideas = self.ideas.lock().unwrap();
        let remaining: Vec<&IdeaData> = ideas.values().filter(|idea| idea.id > after).collect();
        let items: Vec<IdeaView> = remaining
            .iter()
            .take(page.page_size)
            .map(|idea| IdeaView::from((*idea).clone()))
            .collect();
        let next_scroll_token = if remaining.len() > items.len() {
            items.last().map(|last| last.id.to_string())
        } else {
            None
        };

        Ok(SearchResponse {
            total: ideas.len() as i64,
            items,
            next_scroll_token,
        })
    }
}

#[async_trait]
impl Backend for MemoryStorage {
    fn kind(&self) -> BackendKind {
        BackendKind::Custom("memory")
    }

    fn name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        self.check_up()
    }
}
