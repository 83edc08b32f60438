//! Repository trait defining the interface for entity persistence.
//!
//! The trait is async-first and object safe, so services hold an
//! `Arc<dyn Repository<E>>` and never know which backend is in use.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::Entity;
use crate::errors::DomainResult;

/// Persistence operations for one entity collection
///
/// Implementations must enforce [`Entity::unique_fields`] on `insert` and
/// `update`, reporting conflicts as `Fault::DuplicateKey`.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All entities in insertion order
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<E>>;

    /// First entity whose serialized `field` equals `value`
    async fn find_one_by(&self, field: &str, value: &Value) -> DomainResult<Option<E>>;

    /// Store a new entity
    async fn insert(&self, entity: E) -> DomainResult<E>;

    /// Replace an existing entity; `Ok(None)` when its id is unknown
    async fn update(&self, entity: E) -> DomainResult<Option<E>>;

    /// Remove an entity; `Ok(false)` when its id is unknown
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
