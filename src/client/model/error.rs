use crate::model::api::FieldErrorDto;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
    /// Per-field messages for validation failures.
    pub errors: Vec<FieldErrorDto>,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Builds a client-side validation failure from the shared rules.
    pub fn validation(errors: Vec<FieldErrorDto>) -> Self {
        Self {
            status: 422,
            message: "Please fix the highlighted fields".to_string(),
            errors,
        }
    }

    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
