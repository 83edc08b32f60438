//! Value objects exchanged between the API layer and the services.

mod auth;

// Re-export commonly used types
pub use auth::{AuthSession, LoginInput, RegisterInput};
