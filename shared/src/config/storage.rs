//! Storage configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where collections are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory, lost on restart
    Memory,
    /// One JSON file per collection
    Json,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackend::Memory),
            "json" | "file" => Ok(StorageBackend::Json),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,

    /// Directory holding `<collection>.json` files for the JSON backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// JSON file storage rooted at `data_dir`
    pub fn json(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::Json,
            data_dir: data_dir.into(),
        }
    }

    /// Path of the file backing a collection
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }

    pub(crate) fn merge_env(&mut self) {
        if let Some(backend) = std::env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|b| b.parse().ok())
        {
            self.backend = backend;
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
