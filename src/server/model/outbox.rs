use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Attempts before a job is marked failed.
pub const MAX_ATTEMPTS: i32 = 5;

const BASE_BACKOFF_SECONDS: i64 = 30;

/// How long a claimed job stays with its dispatcher. A `PROCESSING` job whose lease
/// has run out is picked up again, so a crash mid-delivery cannot strand it.
const CLAIM_LEASE_SECONDS: i64 = 300;

/// End of the lease taken by a claim at `now`.
pub fn lease_until(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::seconds(CLAIM_LEASE_SECONDS)
}

/// A side effect queued alongside the change that caused it.
///
/// The whole enum is stored as the job payload; `kind` is duplicated into its own
/// column for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboxMessage {
    /// Registration confirmed, with PDF invoice for paid events.
    RegistrationConfirmation { participation_id: i32 },
    /// Accommodation booking confirmed, with PDF invoice.
    AccommodationConfirmation { booking_id: i32 },
    /// Staff replied on a ticket; attachments are inlined.
    TicketResponse { response_id: i32 },
    /// Acknowledgement sent to the ticket owner.
    TicketCreated { ticket_id: i32 },
}

impl OutboxMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RegistrationConfirmation { .. } => "registration_confirmation",
            Self::AccommodationConfirmation { .. } => "accommodation_confirmation",
            Self::TicketResponse { .. } => "ticket_response",
            Self::TicketCreated { .. } => "ticket_created",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Processing,
    Done,
    Failed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Done => "DONE",
            Self::Failed => "FAILED",
        }
    }
}

/// Delay before the next attempt after `previous_attempts` failures: 30s, 60s, 120s...
pub fn backoff(previous_attempts: i32) -> Duration {
    let exponent = previous_attempts.clamp(0, 16) as u32;
    Duration::seconds(BASE_BACKOFF_SECONDS * 2i64.pow(exponent))
}

/// What to do with a job after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry { at: DateTime<Utc> },
    GiveUp,
}

/// `attempts` is the count before the failed attempt.
pub fn retry_decision(attempts: i32, max_attempts: i32, now: DateTime<Utc>) -> RetryDecision {
    if attempts + 1 >= max_attempts {
        RetryDecision::GiveUp
    } else {
        RetryDecision::Retry {
            at: now + backoff(attempts),
        }
    }
}
