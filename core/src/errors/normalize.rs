use serde_json::Value;

use super::{AppError, Fault, TokenError};

/// Message used for unclassified faults that carry no text of their own
pub const DEFAULT_MESSAGE: &str = "Something went wrong!";

/// Reduce a fault to the canonical operational error shape.
///
/// Pure: the fault is only read, and already-operational errors come back
/// unchanged.
pub fn normalize(fault: &Fault) -> AppError {
    match fault {
        Fault::Operational(error) if error.is_operational() => error.clone(),
        Fault::Operational(error) => AppError::unclassified(non_empty(error.message()))
            .with_stack(error.stack()),
        Fault::Cast { path, value } => {
            AppError::bad_request(format!("Invalid {}: {}.", path, value))
        }
        Fault::Validation { errors } => {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            AppError::bad_request(format!("Invalid input data: {}", messages.join(". ")))
        }
        Fault::DuplicateKey { key_value } => {
            let value = key_value
                .first()
                .map(|(_, value)| render_value(value))
                .unwrap_or_else(|| "unknown".to_string());
            AppError::bad_request(format!(
                "Duplicate field value: '{}'. Please use another value!",
                value
            ))
        }
        Fault::Token(TokenError::Invalid(_)) => {
            AppError::unauthorized("Invalid token. Please log in again!")
        }
        Fault::Token(TokenError::Expired) => {
            AppError::unauthorized("Your token has expired! Please log in again.")
        }
        Fault::Unexpected(error) => {
            let message = error.to_string();
            AppError::unclassified(non_empty(&message)).with_stack(format!("Error: {:?}", error))
        }
    }
}

fn non_empty(message: &str) -> &str {
    if message.trim().is_empty() {
        DEFAULT_MESSAGE
    } else {
        message
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
