//! Item entity operations.

use std::sync::Arc;

use taskwire_domain::{DomainError, Item, ItemId};

use crate::infrastructure::ports::{ClockPort, ItemRepo, RepoError};

/// Errors from item operations.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Item entity operations.
///
/// The single place where store mutations commit; callers broadcast the
/// returned snapshot only after a method here returns `Ok`.
pub struct Items {
    repo: Arc<dyn ItemRepo>,
    clock: Arc<dyn ClockPort>,
}

impl Items {
    pub fn new(repo: Arc<dyn ItemRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn list(&self) -> Result<Vec<Item>, RepoError> {
        self.repo.list_all().await
    }

    pub async fn get(&self, id: ItemId) -> Result<Item, RepoError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| RepoError::not_found("Item", id))
    }

    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        completed: bool,
    ) -> Result<Item, ItemError> {
        let item = Item::new(title, description, completed, self.clock.now())?;
        self.repo.save(&item).await?;
        tracing::info!(item_id = %item.id, title = %item.title, "Created item");
        Ok(item)
    }

    pub async fn update(
        &self,
        id: ItemId,
        title: String,
        description: Option<String>,
        completed: bool,
    ) -> Result<Item, ItemError> {
        let mut item = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| RepoError::not_found("Item", id))?;
        item.apply(title, description, completed, self.clock.now())?;
        self.repo.save(&item).await?;
        Ok(item)
    }

    /// Delete an item, returning the removed snapshot.
    pub async fn delete(&self, id: ItemId) -> Result<Item, RepoError> {
        let removed = self
            .repo
            .remove(id)
            .await?
            .ok_or_else(|| RepoError::not_found("Item", id))?;
        tracing::info!(item_id = %id, "Deleted item");
        Ok(removed)
    }
}
