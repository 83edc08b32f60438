//! Configuration module with sub-modules per concern
//!
//! - `auth` - JWT signing and password hashing configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `storage` - Persistence backend selection

pub mod auth;
pub mod environment;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 3000),
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 3000),
            auth: AuthConfig::default(),
            storage: StorageConfig::json("data"),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Preset for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
        }
    }

    /// Load configuration from environment variables on top of the preset
    pub fn from_env() -> Self {
        let mut config = Self::for_environment(Environment::from_env());
        config.merge_env();
        config
    }

    /// Apply the well-known environment variables to this configuration
    pub fn merge_env(&mut self) {
        self.server.merge_env();
        self.auth.merge_env();
        self.storage.merge_env();
        self.logging.merge_env();
    }

    /// Check the configuration for settings that must not reach production
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.auth.jwt.expires_in_seconds <= 0 {
            return Err("JWT expiry must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_follow_environment() {
        let dev = AppConfig::development();
        assert!(dev.environment.is_development());
        assert_eq!(dev.storage.backend, StorageBackend::Memory);
        assert_eq!(dev.logging.level, "debug");

        let prod = AppConfig::production();
        assert!(prod.environment.is_production());
        assert_eq!(prod.storage.backend, StorageBackend::Json);
        assert_eq!(prod.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let prod = AppConfig::production();
        assert!(prod.validate().is_err());

        let mut prod = AppConfig::production();
        prod.auth.jwt = JwtConfig::new("a-real-secret");
        assert!(prod.validate().is_ok());

        // Development tolerates the placeholder secret
        assert!(AppConfig::development().validate().is_ok());
    }
}
