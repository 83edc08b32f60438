//! Request and response bodies

pub mod auth;
pub mod error;
pub mod validation;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
pub use error::ErrorBody;
pub use validation::validate;
