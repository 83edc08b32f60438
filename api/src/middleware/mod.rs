pub mod auth;
pub mod error_handler;

pub use auth::{AuthContext, JwtAuth};
pub use error_handler::ErrorShaper;
