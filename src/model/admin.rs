use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DataCleanupDto {
    #[serde(default)]
    pub cancelled_participations: bool,
    #[serde(default)]
    pub rejected_join_requests: bool,
    /// Delete completed outbox jobs older than this many days.
    pub completed_jobs_older_than_days: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DataCleanupResultDto {
    pub participations_deleted: u64,
    pub join_requests_deleted: u64,
    pub jobs_deleted: u64,
}
