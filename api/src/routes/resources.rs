//! Generic CRUD handlers for the book, task and post collections.
//!
//! Each handler is generic over a [`Served`] resource, which tells it where
//! its service lives in [`AppState`].

use actix_web::{web, HttpResponse, Scope};

use shelf_core::domain::entities::{Book, Post, Resource, Task};
use shelf_core::services::ResourceService;
use shelf_shared::ApiResponse;

use crate::handlers::error::ApiResult;
use crate::routes::protected;
use crate::state::AppState;

/// A resource exposed over HTTP
pub trait Served: Resource {
    fn service(state: &AppState) -> &ResourceService<Self>;
}

impl Served for Book {
    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.books
    }
}

impl Served for Task {
    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.tasks
    }
}

impl Served for Post {
    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.posts
    }
}

/// Who may modify a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Reads are public, create/update/delete need a bearer token
    ProtectedWrites,
}

/// `GET/POST <path>` and `GET/PATCH/DELETE <path>/{id}`
pub fn scope<E: Served>(path: &str, access: Access) -> Scope {
    let write = |route: actix_web::Route| match access {
        Access::Public => route,
        Access::ProtectedWrites => protected(route),
    };

    web::scope(path)
        .service(
            web::resource("")
                .route(web::get().to(list::<E>))
                .route(write(web::post().to(create::<E>))),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(get::<E>))
                .route(write(web::patch().to(update::<E>)))
                .route(write(web::delete().to(delete::<E>))),
        )
}

pub async fn list<E: Served>(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let items = E::service(&state).list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(items)))
}

pub async fn get<E: Served>(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let item = E::service(&state).get(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
}

pub async fn create<E: Served>(
    state: web::Data<AppState>,
    body: web::Json<E::Draft>,
) -> ApiResult<HttpResponse> {
    let item = E::service(&state).create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(
        ApiResponse::success(item).with_message(format!("{} created successfully", E::NAME)),
    ))
}

pub async fn update<E: Served>(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<E::Patch>,
) -> ApiResult<HttpResponse> {
    let item = E::service(&state).update(&id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
}

pub async fn delete<E: Served>(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    E::service(&state).delete(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message(format!(
        "{} deleted successfully",
        E::NAME
    ))))
}
