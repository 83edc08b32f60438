//! Registration and login use cases

use serde_json::Value;
use std::sync::Arc;

use crate::domain::entities::{normalize_email, User};
use crate::domain::value_objects::{AuthSession, LoginInput, RegisterInput};
use crate::errors::{AppError, DomainResult};
use crate::repositories::Repository;
use crate::services::token::TokenService;

use super::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Service handling account creation and password login
pub struct AuthService {
    users: Arc<dyn Repository<User>>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn Repository<User>>,
        tokens: Arc<TokenService>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
        }
    }

    /// Create an account and sign a token for it
    ///
    /// Existing emails and user names are rejected with 409 before any
    /// hashing work is done. A conflict that slips past this check is still
    /// caught by the store as a duplicate key.
    pub async fn register(&self, input: RegisterInput) -> DomainResult<AuthSession> {
        let email = normalize_email(&input.email);
        let user_name = input.user_name.trim().to_string();

        if self
            .users
            .find_one_by("email", &Value::String(email.clone()))
            .await?
            .is_some()
        {
            return Err(AppError::conflict("User with this email already exists").into());
        }
        if self
            .users
            .find_one_by("userName", &Value::String(user_name.clone()))
            .await?
            .is_some()
        {
            return Err(AppError::conflict("User with this username already exists").into());
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        let user = self
            .users
            .insert(User::new(user_name, &email, password_hash))
            .await?;
        let token = self.tokens.sign(user.id)?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(AuthSession { user, token })
    }

    /// Check an email/password pair and sign a token
    pub async fn login(&self, input: LoginInput) -> DomainResult<AuthSession> {
        let (email, password) = match (input.email, input.password) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                (normalize_email(&email), password)
            }
            _ => return Err(AppError::bad_request("Please provide an email and password").into()),
        };

        let Some(user) = self
            .users
            .find_one_by("email", &Value::String(email))
            .await?
        else {
            tracing::debug!("Login rejected: unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS).into());
        };

        if !self.hasher.verify(&password, &user.password_hash).await? {
            tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS).into());
        }

        let token = self.tokens.sign(user.id)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(AuthSession { user, token })
    }
}
