use actix_web::{web, HttpResponse};

use crate::dto::{validate, AuthResponse, RegisterRequest};
use crate::handlers::error::ApiResult;
use crate::state::AppState;

/// Handler for POST /api/auth/register
///
/// # Request
/// ```json
/// { "userName": "alice", "email": "alice@example.com", "password": "secret123" }
/// ```
///
/// # Response
/// 201 with `{success, message, token, data: {id, userName, email, createdAt}}`
///
/// ## Errors
/// - 400: missing or invalid fields
/// - 409: email or user name already taken
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    validate(&request)?;

    let session = state.auth.register(request.into_input()).await?;
    Ok(HttpResponse::Created().json(AuthResponse::new("User registered successfully", &session)))
}
