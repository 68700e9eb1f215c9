use chrono::{DateTime, Duration, Utc};

use crate::model::admin::{DataCleanupDto, DataCleanupResultDto};

/// What a data cleanup run should delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataCleanupParams {
    pub cancelled_participations: bool,
    pub rejected_join_requests: bool,
    /// Completed outbox jobs finished before this instant are deleted.
    pub completed_jobs_before: Option<DateTime<Utc>>,
}

impl DataCleanupParams {
    pub fn from_dto(dto: DataCleanupDto, now: DateTime<Utc>) -> Self {
        Self {
            cancelled_participations: dto.cancelled_participations,
            rejected_join_requests: dto.rejected_join_requests,
            completed_jobs_before: dto
                .completed_jobs_older_than_days
                .map(|days| now - Duration::days(days as i64)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataCleanupResult {
    pub participations_deleted: u64,
    pub join_requests_deleted: u64,
    pub jobs_deleted: u64,
}

impl DataCleanupResult {
    pub fn total(&self) -> u64 {
        self.participations_deleted + self.join_requests_deleted + self.jobs_deleted
    }

    pub fn into_dto(self) -> DataCleanupResultDto {
        DataCleanupResultDto {
            participations_deleted: self.participations_deleted,
            join_requests_deleted: self.join_requests_deleted,
            jobs_deleted: self.jobs_deleted,
        }
    }
}
