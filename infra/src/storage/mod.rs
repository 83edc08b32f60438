//! Storage backends and the factory that wires them from configuration.

mod json_file;

#[cfg(test)]
mod tests;

pub use json_file::JsonFileRepository;

use std::sync::Arc;

use shelf_core::domain::entities::{Book, Entity, Post, Task, User};
use shelf_core::repositories::{InMemoryRepository, Repository};
use shelf_shared::config::{StorageBackend, StorageConfig};

use crate::error::InfraError;

/// One repository per collection, ready to hand to the services
#[derive(Clone)]
pub struct Storage {
    pub books: Arc<dyn Repository<Book>>,
    pub tasks: Arc<dyn Repository<Task>>,
    pub posts: Arc<dyn Repository<Post>>,
    pub users: Arc<dyn Repository<User>>,
}

impl Storage {
    /// Open every collection on the configured backend
    pub async fn open(config: &StorageConfig) -> Result<Self, InfraError> {
        match config.backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::in_memory())
            }
            StorageBackend::Json => {
                tracing::info!(data_dir = %config.data_dir.display(), "Using JSON file storage");
                Ok(Self {
                    books: Arc::new(open_json::<Book>(config).await?),
                    tasks: Arc::new(open_json::<Task>(config).await?),
                    posts: Arc::new(open_json::<Post>(config).await?),
                    users: Arc::new(open_json::<User>(config).await?),
                })
            }
        }
    }

    /// Fresh, empty in-memory collections
    pub fn in_memory() -> Self {
        Self {
            books: Arc::new(InMemoryRepository::<Book>::new()),
            tasks: Arc::new(InMemoryRepository::<Task>::new()),
            posts: Arc::new(InMemoryRepository::<Post>::new()),
            users: Arc::new(InMemoryRepository::<User>::new()),
        }
    }
}

async fn open_json<E: Entity>(config: &StorageConfig) -> Result<JsonFileRepository<E>, InfraError> {
    JsonFileRepository::open(config.collection_path(E::COLLECTION)).await
}
