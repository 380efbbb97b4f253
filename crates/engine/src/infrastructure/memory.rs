//! In-memory item store.
//!
//! Backs the service with a concurrent map. Nothing is persisted across
//! restarts; the `ItemRepo` port keeps a relational adapter swappable.

use async_trait::async_trait;
use dashmap::DashMap;

use taskwire_domain::{Item, ItemId};

use crate::infrastructure::ports::{ItemRepo, RepoError};

/// In-memory `ItemRepo` adapter over a concurrent map.
pub struct InMemoryItemRepo {
    items: DashMap<ItemId, Item>,
}

impl InMemoryItemRepo {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }
}

impl Default for InMemoryItemRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepo for InMemoryItemRepo {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Item>, RepoError> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.created_at);
        Ok(items)
    }

    async fn save(&self, item: &Item) -> Result<(), RepoError> {
        self.items.insert(item.id, item.clone());
        Ok(())
    }

    async fn remove(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        Ok(self.items.remove(&id).map(|(_, item)| item))
    }
}
