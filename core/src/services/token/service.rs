//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::Claims;
use crate::errors::{DomainResult, Fault, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies access tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked against the caller's clock in `verify_at`
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Sign a token for `user_id` issued now
    pub fn sign(&self, user_id: Uuid) -> DomainResult<String> {
        self.sign_at(user_id, Utc::now())
    }

    /// Sign a token for `user_id` issued at `now`
    pub fn sign_at(&self, user_id: Uuid, now: DateTime<Utc>) -> DomainResult<String> {
        let claims = Claims::new(user_id, now, self.config.expires_in_seconds);
        encode(
            &Header::new(self.config.algorithm),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| Fault::unexpected(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token now
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature and structure, then judge expiry against `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::Invalid("invalid signature".to_string()),
                ErrorKind::InvalidToken => TokenError::Invalid("jwt malformed".to_string()),
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;

        if data.claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}
