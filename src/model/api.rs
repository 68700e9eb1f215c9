use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Discriminator carried by every action response.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

/// Successful action envelope.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActionResult<T> {
    pub status: ActionStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ActionStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Success that carries no payload for this call, such as an anonymous
    /// `/api/auth/user`.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Success,
            message: message.into(),
            data: None,
        }
    }
}

impl ActionResult<()> {
    /// Success without a payload.
    pub fn done(message: impl Into<String>) -> Self {
        Self::empty(message)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

impl FieldErrorDto {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error action envelope. `errors` is only present for validation failures.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActionErrorDto {
    pub status: ActionStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorDto>>,
}

impl ActionErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Error,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: Vec<FieldErrorDto>) -> Self {
        Self {
            status: ActionStatus::Error,
            message: message.into(),
            errors: Some(errors),
        }
    }
}

/// Page of results with the total number of rows matching the filter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}
