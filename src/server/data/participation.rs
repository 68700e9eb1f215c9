//! Participation data repository.
//!
//! The unique index on (`user_id`, `event_id`) is the authority on duplicate
//! registrations; `create` lets the violation surface so the service can map it.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::participation::ParticipationStatus,
    server::model::participation::{ParticipationFilter, RegistrantSnapshot},
};

/// Values for a new participation row.
#[derive(Debug, Clone)]
pub struct NewParticipation {
    pub user_id: i32,
    pub event_id: i32,
    pub snapshot: RegistrantSnapshot,
    pub status: ParticipationStatus,
    pub payment_amount: Option<i32>,
    pub payment_screenshot_key: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_submitted_at: Option<DateTime<Utc>>,
    pub payment_verified_at: Option<DateTime<Utc>>,
}

pub type ParticipationWithEvent = (
    entity::participation::Model,
    Option<entity::event::Model>,
);

pub struct ParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        new: NewParticipation,
    ) -> Result<entity::participation::Model, DbErr> {
        let now = Utc::now();
        entity::participation::ActiveModel {
            user_id: ActiveValue::Set(new.user_id),
            event_id: ActiveValue::Set(new.event_id),
            name: ActiveValue::Set(new.snapshot.name),
            email: ActiveValue::Set(new.snapshot.email),
            phone: ActiveValue::Set(new.snapshot.phone),
            college: ActiveValue::Set(new.snapshot.college),
            status: ActiveValue::Set(new.status.as_str().to_string()),
            payment_amount: ActiveValue::Set(new.payment_amount),
            payment_screenshot_key: ActiveValue::Set(new.payment_screenshot_key),
            transaction_id: ActiveValue::Set(new.transaction_id),
            payment_submitted_at: ActiveValue::Set(new.payment_submitted_at),
            payment_verified_at: ActiveValue::Set(new.payment_verified_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::participation::Model>, DbErr> {
        entity::prelude::Participation::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_with_event(&self, id: i32) -> Result<Option<ParticipationWithEvent>, DbErr> {
        entity::prelude::Participation::find_by_id(id)
            .find_also_related(entity::prelude::Event)
            .one(self.db)
            .await
    }

    pub async fn find_by_user_and_event(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Option<entity::participation::Model>, DbErr> {
        entity::prelude::Participation::find()
            .filter(entity::participation::Column::UserId.eq(user_id))
            .filter(entity::participation::Column::EventId.eq(event_id))
            .one(self.db)
            .await
    }

    /// The user's participations with their events, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<ParticipationWithEvent>, DbErr> {
        entity::prelude::Participation::find()
            .filter(entity::participation::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Event)
            .order_by_desc(entity::participation::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets participations matching the filter with pagination.
    ///
    /// # Arguments
    /// - `filter` - Optional event and status restriction
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of rows per page
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Rows for the page and the total number of matching rows
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &ParticipationFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ParticipationWithEvent>, u64), DbErr> {
        let mut query = entity::prelude::Participation::find();
        if let Some(event_id) = filter.event_id {
            query = query.filter(entity::participation::Column::EventId.eq(event_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::participation::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .find_also_related(entity::prelude::Event)
            .order_by_desc(entity::participation::Column::CreatedAt)
            .order_by_desc(entity::participation::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((rows, total))
    }

    /// Records a (re)submitted payment and moves the row to `PAYMENT_SUBMITTED`.
    pub async fn submit_payment(
        &self,
        participation: entity::participation::Model,
        screenshot_key: String,
        transaction_id: Option<String>,
        amount: i32,
        now: DateTime<Utc>,
    ) -> Result<entity::participation::Model, DbErr> {
        let mut active = participation.into_active_model();
        active.status = ActiveValue::Set(ParticipationStatus::PaymentSubmitted.as_str().to_string());
        active.payment_amount = ActiveValue::Set(Some(amount));
        active.payment_screenshot_key = ActiveValue::Set(Some(screenshot_key));
        active.transaction_id = ActiveValue::Set(transaction_id);
        active.payment_submitted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await
    }

    /// Sets the status, stamping `payment_verified_at` when confirming.
    pub async fn set_status(
        &self,
        participation: entity::participation::Model,
        status: ParticipationStatus,
        now: DateTime<Utc>,
    ) -> Result<entity::participation::Model, DbErr> {
        let mut active = participation.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        if status == ParticipationStatus::Confirmed {
            active.payment_verified_at = ActiveValue::Set(Some(now));
        }
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await
    }

    /// Rewrites the registrant snapshot on every participation of the user.
    ///
    /// `None` leaves the stored phone or college untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn sync_snapshot(
        &self,
        user_id: i32,
        name: &str,
        phone: Option<&str>,
        college: Option<&str>,
    ) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Participation::update_many()
            .filter(entity::participation::Column::UserId.eq(user_id))
            .col_expr(entity::participation::Column::Name, Expr::value(name))
            .col_expr(
                entity::participation::Column::UpdatedAt,
                Expr::value(Utc::now()),
            );
        if let Some(phone) = phone {
            update = update.col_expr(entity::participation::Column::Phone, Expr::value(phone));
        }
        if let Some(college) = college {
            update = update.col_expr(
                entity::participation::Column::College,
                Expr::value(college),
            );
        }

        Ok(update.exec(self.db).await?.rows_affected)
    }

    pub async fn find_ids_by_status(&self, status: ParticipationStatus) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::Participation::find()
            .filter(entity::participation::Column::Status.eq(status.as_str()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|p| p.id).collect())
    }

    pub async fn delete_by_ids(&self, ids: Vec<i32>) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Participation::delete_many()
            .filter(entity::participation::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
