//! Error response bodies

use serde::Serialize;

use shelf_core::errors::{AppError, ErrorStatus};

/// JSON body of every error response.
///
/// `stack` and `error` are only filled in development.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub status: ErrorStatus,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a AppError>,
}

impl<'a> ErrorBody<'a> {
    /// Full detail for local debugging
    pub fn development(error: &'a AppError) -> Self {
        Self {
            success: false,
            status: error.status(),
            message: error.message(),
            stack: Some(error.stack()),
            error: Some(error),
        }
    }

    /// Status and message only
    pub fn production(error: &'a AppError) -> Self {
        Self {
            success: false,
            status: error.status(),
            message: error.message(),
            stack: None,
            error: None,
        }
    }
}
