//! Infrastructure-specific error types

use std::path::PathBuf;

use shelf_core::errors::Fault;

#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Reading or writing a collection file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection file holds something other than a JSON array of entities
    #[error("Malformed collection file {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl InfraError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InfraError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        InfraError::Serialization {
            path: path.into(),
            source,
        }
    }
}

/// Storage failures are never the client's fault
impl From<InfraError> for Fault {
    fn from(error: InfraError) -> Self {
        Fault::Unexpected(anyhow::Error::new(error))
    }
}
