//! Application state shared by all workers

use std::sync::Arc;

use shelf_core::domain::entities::{Book, Post, Task};
use shelf_core::services::token::TokenServiceConfig;
use shelf_core::services::{AuthGuard, AuthService, PasswordHasher, ResourceService, TokenService};
use shelf_infra::Storage;
use shelf_shared::config::{AppConfig, Environment};

/// Services wired to one set of repositories
pub struct AppState {
    pub environment: Environment,
    /// Maximum accepted JSON body size in bytes
    pub json_limit: usize,
    pub auth: AuthService,
    pub guard: AuthGuard,
    pub books: ResourceService<Book>,
    pub tasks: ResourceService<Task>,
    pub posts: ResourceService<Post>,
}

impl AppState {
    pub fn new(config: &AppConfig, storage: Storage) -> Self {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));
        let hasher = PasswordHasher::new(config.auth.bcrypt_cost);

        Self {
            environment: config.environment,
            json_limit: config.server.max_payload_size,
            auth: AuthService::new(storage.users.clone(), tokens.clone(), hasher),
            guard: AuthGuard::new(tokens, storage.users.clone()),
            books: ResourceService::new(storage.books),
            tasks: ResourceService::new(storage.tasks),
            posts: ResourceService::new(storage.posts),
        }
    }
}
