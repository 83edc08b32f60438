//! Error value types shared by every collaborator
//!
//! `AppError` is the only shape a client ever sees. The other types in this
//! module describe faults reported by collaborators before normalization.

use serde::Serialize;
use std::backtrace::{Backtrace, BacktraceStatus};
use thiserror::Error;

/// Coarse outcome class derived from an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatus {
    /// The client sent something wrong (4xx)
    Fail,
    /// The server failed (5xx)
    Error,
}

impl ErrorStatus {
    /// 4xx maps to `Fail`, everything else to `Error`
    pub fn from_status_code(status_code: u16) -> Self {
        if (400..500).contains(&status_code) {
            ErrorStatus::Fail
        } else {
            ErrorStatus::Error
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::Fail => "fail",
            ErrorStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational error: a fault with a status code and a message.
///
/// When `is_operational` is set the message is safe to show to end users.
/// `status` is always derived from `status_code`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    message: String,
    status_code: u16,
    status: ErrorStatus,
    is_operational: bool,
    #[serde(skip)]
    stack: String,
}

/// Status code used when none is given
pub const DEFAULT_STATUS_CODE: u16 = 500;

impl AppError {
    /// Create an operational error with an explicit status code
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self::build(message.into(), status_code, true)
    }

    /// Create an operational error with the default status code
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::new(message, DEFAULT_STATUS_CODE)
    }

    /// Create a non-operational server fault; its message must not reach clients
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::build(message.into(), DEFAULT_STATUS_CODE, false)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, 400)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, 401)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, 404)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(message, 409)
    }

    fn build(message: String, status_code: u16, is_operational: bool) -> Self {
        let stack = capture_stack(&message);
        Self {
            message,
            status_code,
            status: ErrorStatus::from_status_code(status_code),
            is_operational,
            stack,
        }
    }

    /// Replace the captured stack, e.g. with the trace of the originating fault
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    /// Trace captured when the error was created
    pub fn stack(&self) -> &str {
        &self.stack
    }
}

fn capture_stack(message: &str) -> String {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => format!("AppError: {}\n{}", message, backtrace),
        _ => format!("AppError: {}", message),
    }
}

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Credential verification failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token expired")]
    Expired,
}
