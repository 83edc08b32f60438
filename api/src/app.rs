//! Application factory
//!
//! Builds the actix-web `App` from shared state. Used by the binary and by
//! the integration tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::JsonPayloadError,
    web, App, Error, HttpRequest,
};
use tracing_actix_web::TracingLogger;

use shelf_core::errors::AppError;

use crate::handlers::error::ApiError;
use crate::middleware::ErrorShaper;
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let environment = state.environment;
    let json_config = web::JsonConfig::default()
        .limit(state.json_limit)
        .error_handler(json_error_handler);

    App::new()
        .app_data(state)
        .app_data(json_config)
        .configure(routes::configure)
        .default_service(web::route().to(routes::fallback::not_found))
        // Order matters: the shaper must see every error, the logger wraps it
        .wrap(ErrorShaper::new(environment))
        .wrap(TracingLogger::default())
}

/// Malformed or oversized JSON bodies are the client's fault
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    ApiError::from(AppError::bad_request(format!("Invalid request body: {}", err))).into()
}
