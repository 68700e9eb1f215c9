use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{participation::ParticipationStatus, team::JoinRequestStatus},
    server::{
        data::{
            outbox::OutboxRepository, participation::ParticipationRepository,
            team::TeamRepository,
        },
        error::AppError,
        model::{
            admin::{DataCleanupParams, DataCleanupResult},
            auth::Principal,
        },
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes stale rows in one transaction.
    ///
    /// Cancelled registrations are first removed from teams (a team led by one is
    /// dissolved) and then deleted. Rejected join requests and completed outbox jobs
    /// older than the cutoff are deleted when requested.
    ///
    /// # Returns
    /// - `Ok(DataCleanupResult)` - Number of rows deleted per kind
    /// - `Err(AppError::AuthErr)` - Caller is not an admin
    /// - `Err(AppError::DbErr)` - Database error, nothing is deleted
    pub async fn data_cleanup(
        &self,
        principal: &Principal,
        params: DataCleanupParams,
    ) -> Result<DataCleanupResult, AppError> {
        principal.require_admin()?;

        let mut result = DataCleanupResult::default();
        let txn = self.db.begin().await?;

        if params.cancelled_participations {
            let participations = ParticipationRepository::new(&txn);
            let ids = participations
                .find_ids_by_status(ParticipationStatus::Cancelled)
                .await?;

            TeamRepository::new(&txn)
                .detach_participations(ids.clone())
                .await?;
            result.participations_deleted = participations.delete_by_ids(ids).await?;
        }

        if params.rejected_join_requests {
            result.join_requests_deleted = TeamRepository::new(&txn)
                .delete_requests_by_status(JoinRequestStatus::Rejected)
                .await?;
        }

        if let Some(cutoff) = params.completed_jobs_before {
            result.jobs_deleted = OutboxRepository::new(&txn)
                .delete_done_before(cutoff)
                .await?;
        }

        txn.commit().await?;

        Ok(result)
    }
}
