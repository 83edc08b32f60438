//! Inputs and outputs of the authentication use cases.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// Registration request, already validated by the caller
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Login request; both fields may be missing from the body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// An authenticated user together with a freshly signed access token
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}
