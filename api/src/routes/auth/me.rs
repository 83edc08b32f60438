use actix_web::HttpResponse;

use shelf_shared::ApiResponse;

use crate::dto::UserProfile;
use crate::middleware::AuthContext;

/// Handler for GET /api/auth/me
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(UserProfile::from(&auth.user)))
}
