//! Field checks shared by the entity schemas

use crate::errors::{Fault, FieldError};

/// Collects schema violations in field declaration order
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<FieldError>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed value of a required text field; records `<field> is required` when blank
    pub fn required(&mut self, field: &str, value: Option<String>) -> String {
        let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
        if value.is_empty() {
            self.push(field, format!("{} is required", field));
        }
        value
    }

    /// Like [`required`](Self::required), for fields a patch may leave out
    pub fn required_if_present(&mut self, field: &str, value: Option<String>) -> Option<String> {
        value.map(|v| self.required(field, Some(v)))
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// `Ok` when nothing was recorded, otherwise a validation fault
    pub fn finish(self) -> Result<(), Fault> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Fault::validation(self.errors))
        }
    }
}
