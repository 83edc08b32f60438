//! Fault taxonomy and normalization.
//!
//! Collaborators report failures as a [`Fault`], a closed set of variants.
//! [`normalize`] reduces any fault to the single [`AppError`] shape that the
//! response layer renders.

mod normalize;
mod types;


pub use normalize::{normalize, DEFAULT_MESSAGE};
pub use types::{AppError, ErrorStatus, FieldError, TokenError, DEFAULT_STATUS_CODE};

use serde_json::Value;
use thiserror::Error;

/// Any failure surfaced by a collaborator, before normalization
#[derive(Error, Debug)]
pub enum Fault {
    /// Already shaped by application code
    #[error(transparent)]
    Operational(#[from] AppError),

    /// An identifier could not be parsed
    #[error("Cast failed for value \"{value}\" at path \"{path}\"")]
    Cast { path: String, value: String },

    /// Schema validation failed; errors are kept in schema order
    #[error("Validation failed for {} field(s)", .errors.len())]
    Validation { errors: Vec<FieldError> },

    /// A uniqueness constraint was violated; the first entry is the conflicting field
    #[error("Duplicate key: {key_value:?}")]
    DuplicateKey { key_value: Vec<(String, Value)> },

    /// The bearer credential could not be verified
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Anything else: I/O, task failures, bugs
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl Fault {
    pub fn cast(path: impl Into<String>, value: impl Into<String>) -> Self {
        Fault::Cast {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Fault::Validation { errors }
    }

    pub fn duplicate(field: impl Into<String>, value: Value) -> Self {
        Fault::DuplicateKey {
            key_value: vec![(field.into(), value)],
        }
    }

    pub fn unexpected(message: impl std::fmt::Display) -> Self {
        Fault::Unexpected(anyhow::anyhow!("{}", message))
    }

    /// Reduce this fault to its client-facing shape
    pub fn normalize(&self) -> AppError {
        normalize(self)
    }

    /// Short name of the variant, used in log records
    pub fn kind(&self) -> &'static str {
        match self {
            Fault::Operational(_) => "OperationalError",
            Fault::Cast { .. } => "CastError",
            Fault::Validation { .. } => "ValidationError",
            Fault::DuplicateKey { .. } => "DuplicateKeyError",
            Fault::Token(TokenError::Invalid(_)) => "JsonWebTokenError",
            Fault::Token(TokenError::Expired) => "TokenExpiredError",
            Fault::Unexpected(_) => "Error",
        }
    }
}

/// Result alias used throughout the domain layer
pub type DomainResult<T> = Result<T, Fault>;
