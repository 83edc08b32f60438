//! Authentication route handlers
//!
//! - `POST /api/auth/register`
//! - `POST /api/auth/login`
//! - `GET /api/auth/me` (bearer token required)

pub mod login;
pub mod me;
pub mod register;

use actix_web::{web, Scope};

use crate::routes::protected;

pub fn scope() -> Scope {
    web::scope("/auth")
        .route("/register", web::post().to(register::register))
        .route("/login", web::post().to(login::login))
        .route("/me", protected(web::get().to(me::me)))
}
