//! # Shelf Core
//!
//! Domain layer for the Shelf backend: entities, the fault taxonomy and its
//! normalizer, repository interfaces with an in-memory store, and the auth
//! and resource services built on them.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
