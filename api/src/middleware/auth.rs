//! JWT authentication middleware for protecting API endpoints.
//!
//! Reads the `Authorization` header, resolves it to a user through the
//! [`AuthGuard`](shelf_core::services::AuthGuard) held in [`AppState`], and
//! injects an [`AuthContext`] into the request. Rejections are answered with
//! a response carrying the fault, which the error shaper renders.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use shelf_core::domain::entities::User;
use shelf_core::errors::{AppError, Fault};
use shelf_core::services::auth::NOT_LOGGED_IN_MESSAGE;

use crate::handlers::error::ApiError;
use crate::state::AppState;

/// Authenticated user injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}

impl AuthContext {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let authorization = authorization_header(&req);

        Box::pin(async move {
            let outcome = match state {
                Some(state) => state
                    .guard
                    .authenticate(authorization.as_deref(), Utc::now())
                    .await
                    .map_err(ApiError::from),
                None => Err(ApiError::from(Fault::unexpected(
                    "Authentication state is not configured",
                ))),
            };

            match outcome {
                Ok(user) => {
                    req.extensions_mut().insert(AuthContext { user });
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(err) => {
                    let (http_req, _) = req.into_parts();
                    Ok(ServiceResponse::from_err(err, http_req).map_into_right_body())
                }
            }
        })
    }
}

/// Raw `Authorization` header value, if it is valid text
fn authorization_header(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .map(str::to_owned)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(AppError::unauthorized(NOT_LOGGED_IN_MESSAGE)).into());

        ready(result)
    }
}
