//! Route handlers and their registration

pub mod auth;
pub mod fallback;
pub mod health;
pub mod resources;

use actix_web::web;

use shelf_core::domain::entities::{Book, Post, Task};

use crate::middleware::JwtAuth;
use resources::Access;

/// Register every API route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(auth::scope())
                .service(resources::scope::<Book>("/books", Access::Public))
                .service(resources::scope::<Task>("/tasks", Access::Public))
                .service(resources::scope::<Post>("/posts", Access::ProtectedWrites)),
        );
}

/// Wrap a route with JWT authentication
pub(crate) fn protected(route: actix_web::Route) -> actix_web::Route {
    route.wrap(JwtAuth::new())
}
