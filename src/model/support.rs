use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{api::FieldErrorDto, attachment::MAX_ATTACHMENTS};

pub const SUBJECT_MIN: usize = 5;
pub const SUBJECT_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;
pub const RESPONSE_MAX: usize = 5000;

macro_rules! string_enum {
    ($name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "server", derive(ToSchema))]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == value)
            }
        }
    };
}

string_enum!(TicketCategory {
    General => "GENERAL",
    Technical => "TECHNICAL",
    Payment => "PAYMENT",
    Registration => "REGISTRATION",
    Accommodation => "ACCOMMODATION",
    Team => "TEAM",
    Other => "OTHER",
});

string_enum!(TicketStatus {
    Open => "OPEN",
    InProgress => "IN_PROGRESS",
    Resolved => "RESOLVED",
    Closed => "CLOSED",
});

string_enum!(TicketPriority {
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
    Urgent => "URGENT",
});

/// An uploaded object to attach to a ticket or response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AttachmentInputDto {
    pub key: String,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateTicketDto {
    pub subject: String,
    pub message: String,
    pub category: TicketCategory,
    pub priority: Option<TicketPriority>,
    #[serde(default)]
    pub attachments: Vec<AttachmentInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateResponseDto {
    pub message: String,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub attachments: Vec<AttachmentInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateTicketDto {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatedTicketDto {
    pub ticket_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AttachmentDto {
    pub id: i32,
    pub key: String,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketSummaryDto {
    pub id: i32,
    pub ticket_number: String,
    pub user_id: i32,
    pub subject: String,
    pub category: TicketCategory,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// Number of responses visible to the ticket owner.
    pub response_count: u64,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ResponseDto {
    pub id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub from_staff: bool,
    pub message: String,
    pub is_internal: bool,
    pub attachments: Vec<AttachmentDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketDetailDto {
    pub ticket: TicketSummaryDto,
    pub message: String,
    pub attachments: Vec<AttachmentDto>,
    pub responses: Vec<ResponseDto>,
}

/// Checks ticket text against the length rules.
pub fn validate_ticket_text(subject: &str, message: &str) -> Vec<FieldErrorDto> {
    let mut errors = Vec::new();

    let subject_len = subject.trim().chars().count();
    if subject_len < SUBJECT_MIN {
        errors.push(FieldErrorDto::new(
            "subject",
            format!("Subject must be at least {} characters", SUBJECT_MIN),
        ));
    } else if subject_len > SUBJECT_MAX {
        errors.push(FieldErrorDto::new(
            "subject",
            format!("Subject must be at most {} characters", SUBJECT_MAX),
        ));
    }

    let message_len = message.trim().chars().count();
    if message_len < MESSAGE_MIN {
        errors.push(FieldErrorDto::new(
            "message",
            format!("Message must be at least {} characters", MESSAGE_MIN),
        ));
    } else if message_len > MESSAGE_MAX {
        errors.push(FieldErrorDto::new(
            "message",
            format!("Message must be at most {} characters", MESSAGE_MAX),
        ));
    }

    errors
}

/// Checks a response body and its attachment count.
pub fn validate_response_text(message: &str, attachment_count: usize) -> Vec<FieldErrorDto> {
    let mut errors = Vec::new();

    let len = message.trim().chars().count();
    if len == 0 {
        errors.push(FieldErrorDto::new("message", "Message is required"));
    } else if len > RESPONSE_MAX {
        errors.push(FieldErrorDto::new(
            "message",
            format!("Message must be at most {} characters", RESPONSE_MAX),
        ));
    }

    if attachment_count > MAX_ATTACHMENTS {
        errors.push(FieldErrorDto::new(
            "attachments",
            format!("At most {} attachments are allowed", MAX_ATTACHMENTS),
        ));
    }

    errors
}
