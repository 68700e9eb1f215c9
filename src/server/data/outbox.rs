//! Outbox job repository.
//!
//! Jobs are enqueued on the caller's connection, normally the transaction of the
//! change that caused them. The dispatcher claims a job by flipping it to
//! `PROCESSING` and pushing `next_attempt_at` out by a lease; a claim only succeeds
//! for one caller. Once the lease runs out the job is due again.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::outbox::{lease_until, JobStatus, OutboxMessage, MAX_ATTEMPTS};

fn claimable() -> [&'static str; 2] {
    [JobStatus::Pending.as_str(), JobStatus::Processing.as_str()]
}

pub struct OutboxRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OutboxRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Queues a message to be dispatched at or after `now`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The pending job
    /// - `Err(DbErr)` - Serialization or database error
    pub async fn enqueue(
        &self,
        message: &OutboxMessage,
        now: DateTime<Utc>,
    ) -> Result<entity::outbox_job::Model, DbErr> {
        let payload =
            serde_json::to_string(message).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::outbox_job::ActiveModel {
            kind: ActiveValue::Set(message.kind().to_string()),
            payload: ActiveValue::Set(payload),
            status: ActiveValue::Set(JobStatus::Pending.as_str().to_string()),
            attempts: ActiveValue::Set(0),
            max_attempts: ActiveValue::Set(MAX_ATTEMPTS),
            next_attempt_at: ActiveValue::Set(now),
            last_error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Pending jobs due at `now` and processing jobs whose lease expired, earliest
    /// first.
    pub async fn get_due(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<entity::outbox_job::Model>, DbErr> {
        entity::prelude::OutboxJob::find()
            .filter(entity::outbox_job::Column::Status.is_in(claimable()))
            .filter(entity::outbox_job::Column::NextAttemptAt.lte(now))
            .order_by_asc(entity::outbox_job::Column::NextAttemptAt)
            .order_by_asc(entity::outbox_job::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::outbox_job::Model>, DbErr> {
        entity::prelude::OutboxJob::find_by_id(id).one(self.db).await
    }

    /// Claims a due job, leasing it to the caller until `lease_until(now)`.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller owns the job now
    /// - `Ok(false)` - Someone else holds the lease, or the job is settled
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::OutboxJob::update_many()
            .filter(entity::outbox_job::Column::Id.eq(id))
            .filter(entity::outbox_job::Column::Status.is_in(claimable()))
            .filter(entity::outbox_job::Column::NextAttemptAt.lte(now))
            .col_expr(
                entity::outbox_job::Column::Status,
                Expr::value(JobStatus::Processing.as_str()),
            )
            .col_expr(
                entity::outbox_job::Column::NextAttemptAt,
                Expr::value(lease_until(now)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn mark_done(&self, id: i32, attempts: i32, now: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::OutboxJob::update_many()
            .filter(entity::outbox_job::Column::Id.eq(id))
            .col_expr(
                entity::outbox_job::Column::Status,
                Expr::value(JobStatus::Done.as_str()),
            )
            .col_expr(entity::outbox_job::Column::Attempts, Expr::value(attempts))
            .col_expr(entity::outbox_job::Column::CompletedAt, Expr::value(now))
            .col_expr(
                entity::outbox_job::Column::LastError,
                Expr::value(Option::<String>::None),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Puts a failed job back in the queue for another attempt at `next_attempt_at`.
    pub async fn mark_retry(
        &self,
        id: i32,
        attempts: i32,
        next_attempt_at: DateTime<Utc>,
        error: &str,
    ) -> Result<(), DbErr> {
        entity::prelude::OutboxJob::update_many()
            .filter(entity::outbox_job::Column::Id.eq(id))
            .col_expr(
                entity::outbox_job::Column::Status,
                Expr::value(JobStatus::Pending.as_str()),
            )
            .col_expr(entity::outbox_job::Column::Attempts, Expr::value(attempts))
            .col_expr(
                entity::outbox_job::Column::NextAttemptAt,
                Expr::value(next_attempt_at),
            )
            .col_expr(entity::outbox_job::Column::LastError, Expr::value(error))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn mark_failed(&self, id: i32, attempts: i32, error: &str) -> Result<(), DbErr> {
        entity::prelude::OutboxJob::update_many()
            .filter(entity::outbox_job::Column::Id.eq(id))
            .col_expr(
                entity::outbox_job::Column::Status,
                Expr::value(JobStatus::Failed.as_str()),
            )
            .col_expr(entity::outbox_job::Column::Attempts, Expr::value(attempts))
            .col_expr(entity::outbox_job::Column::LastError, Expr::value(error))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes `DONE` jobs completed before `cutoff`.
    pub async fn delete_done_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::OutboxJob::delete_many()
            .filter(entity::outbox_job::Column::Status.eq(JobStatus::Done.as_str()))
            .filter(entity::outbox_job::Column::CompletedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
