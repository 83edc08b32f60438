//! Bearer credential guard
//!
//! Two states: unauthenticated, and authenticated as a user that still
//! exists. The credential and its decoded payload are never logged.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::errors::{AppError, DomainResult, Fault, TokenError};
use crate::repositories::Repository;
use crate::services::token::TokenService;

pub const NOT_LOGGED_IN_MESSAGE: &str = "You are not logged in! Please log in to get access";
pub const USER_NO_LONGER_EXISTS_MESSAGE: &str = "The user belonging to this token no longer exists.";

/// Resolves `Authorization` headers to users
pub struct AuthGuard {
    tokens: Arc<TokenService>,
    users: Arc<dyn Repository<User>>,
}

impl AuthGuard {
    pub fn new(tokens: Arc<TokenService>, users: Arc<dyn Repository<User>>) -> Self {
        Self { tokens, users }
    }

    /// Authenticate the raw `Authorization` header value at `now`
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<User> {
        let token = authorization
            .and_then(extract_bearer_token)
            .ok_or_else(|| AppError::unauthorized(NOT_LOGGED_IN_MESSAGE))?;

        let claims = self.tokens.verify_at(token, now)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| TokenError::Invalid("malformed subject".to_string()))?;

        match self.users.find_by_id(user_id).await? {
            Some(user) => {
                tracing::debug!(user_id = %user.id, "Request authenticated");
                Ok(user)
            }
            None => Err(Fault::from(AppError::unauthorized(
                USER_NO_LONGER_EXISTS_MESSAGE,
            ))),
        }
    }
}

/// Token part of a `Bearer <token>` header value
///
/// The header must start with `Bearer`; the token is the second
/// space-separated part.
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    if !header.starts_with("Bearer") {
        return None;
    }
    header.split(' ').nth(1).filter(|token| !token.is_empty())
}
