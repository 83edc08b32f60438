//! # Shelf API
//!
//! actix-web application serving the book, task and post collections plus
//! user registration and login. Every failure is funnelled through the
//! [`ErrorShaper`](middleware::ErrorShaper) middleware, which renders it
//! according to the active environment.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;
