use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shelf_core::domain::entities::User;
use shelf_core::domain::value_objects::{AuthSession, LoginInput, RegisterInput};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(
        required(message = "userName is required"),
        length(min = 3, message = "userName must be at least 3 characters")
    )]
    pub user_name: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 6, message = "password must be at least 6 characters")
    )]
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Only meaningful after a successful `validate()`
    pub fn into_input(self) -> RegisterInput {
        RegisterInput {
            user_name: self.user_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(request: LoginRequest) -> Self {
        LoginInput {
            email: request.email,
            password: request.password,
        }
    }
}

/// Public view of a user; the password hash never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// Body of register and login responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub data: UserProfile,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, session: &AuthSession) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: session.token.clone(),
            data: UserProfile::from(&session.user),
        }
    }
}
