//! # Infrastructure Layer
//!
//! Concrete storage for the Shelf application. The domain only sees
//! `Arc<dyn Repository<E>>`; this crate decides whether that is process
//! memory or a JSON file per collection.

pub mod error;
pub mod storage;

pub use error::InfraError;
pub use storage::{JsonFileRepository, Storage};
