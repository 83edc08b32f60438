//! Token service module for JWT management
//!
//! Access tokens are HS256 JWTs carrying [`Claims`](crate::domain::entities::Claims).
//! Expiry is judged against a caller-supplied clock so verification is
//! deterministic in tests.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
