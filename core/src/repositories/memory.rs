//! In-memory repository, the default store in development

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Entity;
use crate::errors::DomainResult;

use super::collection::Collection;
use super::trait_::Repository;

/// Process-local store; contents are lost on restart
pub struct InMemoryRepository<E> {
    collection: Arc<RwLock<Collection<E>>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            collection: Arc::new(RwLock::new(Collection::new())),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.collection.read().await.items().to_vec())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<E>> {
        Ok(self.collection.read().await.get(id).cloned())
    }

    async fn find_one_by(&self, field: &str, value: &Value) -> DomainResult<Option<E>> {
        Ok(self.collection.read().await.find_one_by(field, value).cloned())
    }

    async fn insert(&self, entity: E) -> DomainResult<E> {
        self.collection.write().await.insert(entity.clone())?;
        Ok(entity)
    }

    async fn update(&self, entity: E) -> DomainResult<Option<E>> {
        let replaced = self.collection.write().await.replace(entity.clone())?;
        Ok(replaced.then_some(entity))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.collection.write().await.remove(id))
    }
}
