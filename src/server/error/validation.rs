use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ActionErrorDto, FieldErrorDto};

/// Input rejected by validation, carrying one entry per offending field.
#[derive(Error, Debug)]
#[error("Validation failed: {}", format_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldErrorDto>,
}

fn format_errors(errors: &[FieldErrorDto]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(errors: Vec<FieldErrorDto>) -> Self {
        Self { errors }
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldErrorDto::new(field, message)],
        }
    }

    /// `Ok` when `errors` is empty.
    pub fn check(errors: Vec<FieldErrorDto>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = self
            .errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "Invalid input".to_string());

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ActionErrorDto::with_errors(message, self.errors)),
        )
            .into_response()
    }
}
