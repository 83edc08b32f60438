//! Shared configuration and common types for the Shelf server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types (environment, server, auth, storage, logging)
//! - The success response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, JwtConfig, LogFormat, LoggingConfig, ServerConfig,
    StorageBackend, StorageConfig,
};
pub use types::ApiResponse;
