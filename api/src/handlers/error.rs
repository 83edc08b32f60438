//! Conversion of faults into HTTP responses.
//!
//! Handlers return [`ApiResult`]. The [`ErrorShaper`](crate::middleware::ErrorShaper)
//! middleware normalizes the fault and calls [`shape`] with the active
//! environment; `ApiError`'s own `error_response` uses the production shape
//! so nothing leaks if the middleware is missing.

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};

use shelf_core::errors::{AppError, Fault, TokenError};
use shelf_shared::config::Environment;

use crate::dto::error::ErrorBody;

/// Message shown for every non-operational fault outside development
pub const GENERIC_MESSAGE: &str = "Something went wrong! Please try again later.";

const GENERIC_BODY: &str =
    r#"{"success":false,"status":"error","message":"Something went wrong! Please try again later."}"#;

/// Fault wrapper returned from handlers and middleware
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(pub Fault);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn fault(&self) -> &Fault {
        &self.0
    }

    pub fn normalize(&self) -> AppError {
        self.0.normalize()
    }
}

impl From<Fault> for ApiError {
    fn from(fault: Fault) -> Self {
        ApiError(fault)
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        ApiError(Fault::from(error))
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError(Fault::from(error))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.normalize().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        shape(&self.normalize(), Environment::Production)
    }
}

/// Render a normalized error for `environment`
///
/// - development: the error's status with message, stack and the error object
/// - production, operational: status and message only
/// - production, non-operational: the fixed generic 500 body
///
/// Never panics; an unusable status code or a serialization failure falls
/// back to the generic body.
pub fn shape(error: &AppError, environment: Environment) -> HttpResponse {
    match environment {
        Environment::Development => render(error.status_code(), &ErrorBody::development(error)),
        Environment::Production if error.is_operational() => {
            render(error.status_code(), &ErrorBody::production(error))
        }
        Environment::Production => generic_response(),
    }
}

/// The generic production body with status 500
pub fn generic_response() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(ContentType::json())
        .body(GENERIC_BODY)
}

fn render(status_code: u16, body: &ErrorBody<'_>) -> HttpResponse {
    let status = match StatusCode::from_u16(status_code) {
        Ok(status) if status.is_client_error() || status.is_server_error() => status,
        _ => return generic_response(),
    };
    match serde_json::to_vec(body) {
        Ok(bytes) => HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(bytes),
        Err(_) => generic_response(),
    }
}
