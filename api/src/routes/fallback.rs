use actix_web::{HttpRequest, HttpResponse};

use shelf_core::errors::AppError;

use crate::handlers::error::ApiResult;

/// Default service: any unmatched route is a 404 fault
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(AppError::not_found(format!("Can't find {} on this server!", req.uri())).into())
}
