//! Terminal error-shaping middleware.
//!
//! Wraps the whole application. Every response that carries an error
//! (handler `Err`, extractor failure, middleware rejection) and every bare
//! 4xx/5xx produced by the framework is normalized, logged once and
//! re-rendered with [`shape`] for the configured environment. Shaped
//! responses are marked and never shaped twice.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::StatusCode,
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use tracing_actix_web::RequestId;

use shelf_core::errors::AppError;
use shelf_shared::config::Environment;

use crate::handlers::error::{shape, ApiError};
use crate::middleware::auth::AuthContext;

/// Marker placed on responses this middleware produced
#[derive(Debug, Clone, Copy)]
struct Shaped;

/// A fault reduced to its client-facing shape, with its raw form kept for the log
#[derive(Debug)]
pub struct Incident {
    pub error: AppError,
    /// Variant name of the originating fault
    pub kind: &'static str,
    /// `Debug` rendering of the originating fault
    pub raw: String,
}

/// Request fields captured before routing, for the production log record
#[derive(Debug)]
struct RequestMeta {
    ip: String,
    url: String,
    method: String,
    request_id: Option<String>,
}

impl RequestMeta {
    fn capture(req: &ServiceRequest) -> Self {
        let ip = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();
        let request_id = req.extensions().get::<RequestId>().map(|id| id.to_string());
        Self {
            ip,
            url: req.uri().to_string(),
            method: req.method().to_string(),
            request_id,
        }
    }
}

/// Middleware factory for environment-aware error responses
#[derive(Debug, Clone, Copy)]
pub struct ErrorShaper {
    environment: Environment,
}

impl ErrorShaper {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorShaper
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorShaperService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorShaperService {
            service: Rc::new(service),
            environment: self.environment,
        }))
    }
}

pub struct ErrorShaperService<S> {
    service: Rc<S>,
    environment: Environment,
}

impl<S, B> Service<ServiceRequest> for ErrorShaperService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let environment = self.environment;
        // Owned copies only: the router needs the request to be uniquely held
        let meta = RequestMeta::capture(&req);

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    if res.response().extensions().get::<Shaped>().is_some() {
                        return Ok(res.map_into_left_body());
                    }
                    let incident = match res.response().error() {
                        Some(err) => adapt(err),
                        None if is_failure(res.status()) => adapt_status(res.status()),
                        None => return Ok(res.map_into_left_body()),
                    };
                    let user = res
                        .request()
                        .extensions()
                        .get::<AuthContext>()
                        .map(|auth| auth.user_id().to_string());
                    log_error(&meta, user.as_deref(), &incident, environment);

                    let (http_req, _) = res.into_parts();
                    let response = shaped(&incident.error, environment);
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                }
                Err(err) => {
                    let incident = adapt(&err);
                    log_error(&meta, None, &incident, environment);
                    let response = shaped(&incident.error, environment);
                    Err(InternalError::from_response(err, response).into())
                }
            }
        })
    }
}

fn is_failure(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

/// Normalize any actix error into the operational error shape.
///
/// Faults raised through [`ApiError`] are normalized by the core rules.
/// Framework errors below 500 are treated as operational with the
/// framework's message; anything else is unclassified.
pub fn adapt(err: &Error) -> Incident {
    if let Some(api_error) = err.as_error::<ApiError>() {
        let fault = api_error.fault();
        return Incident {
            error: fault.normalize(),
            kind: fault.kind(),
            raw: format!("{:?}", fault),
        };
    }
    let status = err.as_response_error().status_code();
    let error = if status.as_u16() < 500 {
        AppError::new(err.to_string(), status.as_u16())
    } else {
        AppError::unclassified(err.to_string())
    };
    Incident {
        error,
        kind: "HttpError",
        raw: format!("{:?}", err),
    }
}

/// A failure status the framework produced without an error, e.g. 405 from a resource
pub fn adapt_status(status: StatusCode) -> Incident {
    let message = status.canonical_reason().unwrap_or("Request failed");
    let error = if status.is_client_error() {
        AppError::new(message, status.as_u16())
    } else {
        AppError::unclassified(message)
    };
    Incident {
        error,
        kind: "HttpError",
        raw: status.to_string(),
    }
}

fn shaped(error: &AppError, environment: Environment) -> HttpResponse {
    let mut response = shape(error, environment);
    response.extensions_mut().insert(Shaped);
    response
}

/// One log record per fault, before the response is sent
fn log_error(meta: &RequestMeta, user: Option<&str>, incident: &Incident, environment: Environment) {
    let error = &incident.error;
    if environment.is_development() {
        tracing::error!(
            kind = incident.kind,
            fault = %incident.raw,
            status_code = error.status_code(),
            stack = error.stack(),
            "{}",
            error.message()
        );
        return;
    }

    if error.status_code() >= 500 {
        tracing::error!(
            status_code = error.status_code(),
            status = %error.status(),
            ip = %meta.ip,
            url = %meta.url,
            method = %meta.method,
            user,
            request_id = meta.request_id.as_deref(),
            stack = error.stack(),
            "Prod Error: {}",
            error.message()
        );
    } else {
        tracing::warn!(
            status_code = error.status_code(),
            status = %error.status(),
            ip = %meta.ip,
            url = %meta.url,
            method = %meta.method,
            user,
            request_id = meta.request_id.as_deref(),
            stack = error.stack(),
            "Prod Error: {}",
            error.message()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{error::ErrorNotFound, error::ErrorServiceUnavailable};
    use shelf_core::errors::Fault;
    use serde_json::json;

    #[test]
    fn test_adapt_api_error_uses_core_rules() {
        let err: Error = ApiError::from(Fault::cast("id", "abc")).into();
        let incident = adapt(&err);
        assert_eq!(incident.error.message(), "Invalid id: abc.");
        assert_eq!(incident.error.status_code(), 400);
    }

    #[test]
    fn test_adapt_keeps_raw_fault_for_the_log() {
        let err: Error = ApiError::from(Fault::duplicate("email", json!("a@b.com"))).into();
        let incident = adapt(&err);
        assert_eq!(incident.kind, "DuplicateKeyError");
        assert!(incident.raw.contains("email"));
        assert!(incident.raw.contains("a@b.com"));

        let err: Error = ApiError::from(Fault::cast("id", "abc")).into();
        let incident = adapt(&err);
        assert_eq!(incident.kind, "CastError");
        assert!(incident.raw.contains("path: \"id\""));
    }

    #[test]
    fn test_adapt_framework_client_error_is_operational() {
        let incident = adapt(&ErrorNotFound("no such thing"));
        assert_eq!(incident.error.status_code(), 404);
        assert!(incident.error.is_operational());
        assert_eq!(incident.error.message(), "no such thing");
    }

    #[test]
    fn test_adapt_framework_server_error_is_unclassified() {
        let incident = adapt(&ErrorServiceUnavailable("backend down"));
        assert_eq!(incident.error.status_code(), 500);
        assert!(!incident.error.is_operational());
    }

    #[test]
    fn test_adapt_bare_status() {
        let incident = adapt_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(incident.error.status_code(), 405);
        assert_eq!(incident.error.message(), "Method Not Allowed");
        assert!(incident.error.is_operational());

        let incident = adapt_status(StatusCode::BAD_GATEWAY);
        assert_eq!(incident.error.status_code(), 500);
        assert!(!incident.error.is_operational());
    }
}
