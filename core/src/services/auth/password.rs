//! bcrypt password hashing

use crate::errors::{DomainResult, Fault};

/// Hashes and checks passwords off the async executor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| Fault::unexpected(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| Fault::Unexpected(anyhow::Error::new(e).context("Failed to hash password")))
    }

    pub async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| Fault::unexpected(format!("Password check task failed: {}", e)))?
            .map_err(|e| Fault::Unexpected(anyhow::Error::new(e).context("Failed to verify password")))
    }
}
