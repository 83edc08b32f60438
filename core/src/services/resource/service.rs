//! CRUD use cases over any [`Resource`]

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Resource;
use crate::errors::{AppError, DomainResult, Fault};
use crate::repositories::Repository;

/// List, read, create, update and delete one resource collection
pub struct ResourceService<E: Resource> {
    repository: Arc<dyn Repository<E>>,
}

impl<E: Resource> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<E: Resource> ResourceService<E> {
    pub fn new(repository: Arc<dyn Repository<E>>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> DomainResult<Vec<E>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, raw_id: &str) -> DomainResult<E> {
        let id = parse_id(raw_id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>())
    }

    pub async fn create(&self, draft: E::Draft) -> DomainResult<E> {
        let entity = E::create(draft, Utc::now())?;
        let entity = self.repository.insert(entity).await?;
        tracing::debug!(collection = E::COLLECTION, id = %entity.id(), "Created");
        Ok(entity)
    }

    /// Apply a partial update; the stored entity is untouched when validation fails
    pub async fn update(&self, raw_id: &str, patch: E::Patch) -> DomainResult<E> {
        let mut entity = self.get(raw_id).await?;
        entity.apply(patch, Utc::now())?;
        self.repository
            .update(entity)
            .await?
            .ok_or_else(|| not_found::<E>())
    }

    pub async fn delete(&self, raw_id: &str) -> DomainResult<()> {
        let id = parse_id(raw_id)?;
        if self.repository.delete(id).await? {
            tracing::debug!(collection = E::COLLECTION, id = %id, "Deleted");
            Ok(())
        } else {
            Err(not_found::<E>())
        }
    }
}

/// Parse a path identifier, reporting a cast fault on the `id` path
pub fn parse_id(raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Fault::cast("id", raw))
}

fn not_found<E: Resource>() -> Fault {
    AppError::not_found(format!("{} not found", E::NAME)).into()
}
