//! JSON file repository
//!
//! The whole collection lives in memory and is written back to
//! `<data_dir>/<collection>.json` after every mutation. Writers hold the
//! store's lock across the write, so concurrent updates cannot interleave.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

use shelf_core::domain::entities::Entity;
use shelf_core::errors::DomainResult;
use shelf_core::repositories::{Collection, Repository};

use crate::error::InfraError;

pub struct JsonFileRepository<E> {
    path: PathBuf,
    collection: RwLock<Collection<E>>,
}

impl<E: Entity> JsonFileRepository<E> {
    /// Load the collection at `path`; a missing file is an empty collection
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InfraError> {
        let path = path.into();
        let items = load::<E>(&path).await?;
        tracing::debug!(
            collection = E::COLLECTION,
            path = %path.display(),
            count = items.len(),
            "Collection loaded"
        );
        Ok(Self {
            path,
            collection: RwLock::new(Collection::from_items(items)),
        })
    }

    /// Run `mutate` on a copy, persist it, then commit it in memory
    async fn mutate<T>(
        &self,
        mutate: impl FnOnce(&mut Collection<E>) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut guard = self.collection.write().await;
        let mut next = guard.clone();
        let result = mutate(&mut next)?;
        persist(&self.path, next.items()).await?;
        *guard = next;
        Ok(result)
    }
}

async fn load<E: Entity>(path: &Path) -> Result<Vec<E>, InfraError> {
    match tokio::fs::read(path).await {
        Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
        Ok(bytes) => {
            serde_json::from_slice(&bytes).map_err(|e| InfraError::serialization(path, e))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(InfraError::io(path, e)),
    }
}

/// Write through a sibling temp file so readers never see a partial file
async fn persist<E: Entity>(path: &Path, items: &[E]) -> Result<(), InfraError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| InfraError::io(parent, e))?;
    }

    let bytes = serde_json::to_vec_pretty(items).map_err(|e| InfraError::serialization(path, e))?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|e| InfraError::io(&tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| InfraError::io(path, e))?;
    Ok(())
}

#[async_trait]
impl<E: Entity> Repository<E> for JsonFileRepository<E> {
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
        let stored = entity.clone();
        self.mutate(move |collection| collection.insert(stored)).await?;
        Ok(entity)
    }

    async fn update(&self, entity: E) -> DomainResult<Option<E>> {
        let stored = entity.clone();
        let replaced = self
            .mutate(move |collection| collection.replace(stored))
            .await?;
        Ok(replaced.then_some(entity))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        {
            let collection = self.collection.read().await;
            if collection.get(id).is_none() {
                return Ok(false);
            }
        }
        self.mutate(|collection| Ok(collection.remove(id))).await
    }
}
