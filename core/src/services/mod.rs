//! Business services containing domain logic and use cases.

pub mod auth;
pub mod resource;
pub mod token;

// Re-export commonly used types
pub use auth::{extract_bearer_token, AuthGuard, AuthService, PasswordHasher};
pub use resource::{parse_id, ResourceService};
pub use token::{TokenService, TokenServiceConfig};
