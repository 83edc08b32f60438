//! Error conversion and response rendering shared by every handler

pub mod error;

pub use error::{generic_response, shape, ApiError, ApiResult, GENERIC_MESSAGE};
