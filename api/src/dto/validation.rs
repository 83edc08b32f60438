//! Bridge from `validator` reports to validation faults

use validator::{Validate, ValidationErrors};

use shelf_core::errors::{Fault, FieldError};

use crate::handlers::error::ApiError;

/// Validate a request body, reporting failures as `Fault::Validation`
pub fn validate<T: Validate>(dto: &T) -> Result<(), ApiError> {
    dto.validate().map_err(|errors| ApiError::from(into_fault(&errors)))
}

/// Field errors ordered by field name, one entry per failed rule
pub fn into_fault(errors: &ValidationErrors) -> Fault {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let field = field.to_string();
            let messages = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect();
            (field, messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    Fault::validation(
        fields
            .into_iter()
            .flat_map(|(field, messages)| {
                messages
                    .into_iter()
                    .map(move |message| FieldError::new(field.clone(), message))
            })
            .collect(),
    )
}
