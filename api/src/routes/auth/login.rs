use actix_web::{web, HttpResponse};

use crate::dto::{AuthResponse, LoginRequest};
use crate::handlers::error::ApiResult;
use crate::state::AppState;

/// Handler for POST /api/auth/login
///
/// ## Errors
/// - 400: email or password missing
/// - 401: unknown email or wrong password
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let session = state.auth.login(body.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(AuthResponse::new("Logged in successfully", &session)))
}
