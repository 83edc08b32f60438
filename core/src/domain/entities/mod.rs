//! Domain entities stored in the resource collections.
//!
//! Every entity implements [`Entity`], which is all a repository needs. The
//! ones exposed as plain CRUD resources also implement [`Resource`], which
//! describes how create and update bodies are checked and applied.

mod book;
mod post;
mod schema;
mod task;
mod token;
mod user;

#[cfg(test)]
mod tests;

pub use book::{Book, BookDraft, BookPatch, MIN_PUBLISHED_YEAR};
pub use post::{Post, PostDraft, PostPatch};
pub use schema::Violations;
pub use task::{Task, TaskDraft, TaskPatch};
pub use token::Claims;
pub use user::{normalize_email, User};

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::DomainResult;

/// A persisted record with a stable identifier
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Human readable name, used in messages ("Book not found")
    const NAME: &'static str;

    /// Collection name, used for file names and log fields
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;

    /// Fields that must be unique across the collection, in check order
    fn unique_fields(&self) -> Vec<(&'static str, Value)> {
        Vec::new()
    }
}

/// An entity managed through the generic CRUD endpoints
pub trait Resource: Entity {
    /// Create body; every field optional so missing ones are reported as validation faults
    type Draft: DeserializeOwned + Send + 'static;

    /// Update body; absent fields are left unchanged
    type Patch: DeserializeOwned + Send + 'static;

    /// Build a new entity from a draft, validating it against the schema
    fn create(draft: Self::Draft, now: DateTime<Utc>) -> DomainResult<Self>;

    /// Apply a patch in place, validating the changed fields
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>) -> DomainResult<()>;
}
