use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Lifecycle of a registration (and of an accommodation booking).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipationStatus {
    Registered,
    PaymentSubmitted,
    Confirmed,
    Cancelled,
}

impl ParticipationStatus {
    pub const ALL: [ParticipationStatus; 4] = [
        Self::Registered,
        Self::PaymentSubmitted,
        Self::Confirmed,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "REGISTERED",
            Self::PaymentSubmitted => "PAYMENT_SUBMITTED",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Whether `self -> next` is a permitted move.
    ///
    /// A registration can only skip payment and go straight to `CONFIRMED` when the
    /// event is free. Re-submitting a payment keeps the status at `PAYMENT_SUBMITTED`.
    pub fn can_transition_to(self, next: Self, free_event: bool) -> bool {
        use ParticipationStatus::*;
        match (self, next) {
            (Registered, PaymentSubmitted) | (Registered, Cancelled) => true,
            (Registered, Confirmed) => free_event,
            (PaymentSubmitted, PaymentSubmitted)
            | (PaymentSubmitted, Confirmed)
            | (PaymentSubmitted, Cancelled) => true,
            (Confirmed, Cancelled) => true,
            _ => false,
        }
    }
}

/// Registrant snapshot submitted with a registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RegistrationDto {
    pub name: String,
    pub phone: String,
    pub college: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CheckoutDto {
    pub name: String,
    pub phone: String,
    pub college: String,
    /// Storage key returned by the payment upload endpoint.
    pub screenshot_key: String,
    pub transaction_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReuploadPaymentDto {
    pub participation_id: i32,
    pub screenshot_key: String,
    pub transaction_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ParticipationDto {
    pub id: i32,
    pub user_id: i32,
    pub event_id: i32,
    pub event_name: String,
    pub event_slug: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub status: ParticipationStatus,
    pub payment_amount: Option<i32>,
    pub payment_screenshot_key: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_submitted_at: Option<DateTime<Utc>>,
    pub payment_verified_at: Option<DateTime<Utc>>,
    pub team_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
