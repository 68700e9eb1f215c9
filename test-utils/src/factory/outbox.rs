//! Outbox job factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for outbox jobs. Defaults to a due `PENDING` job with no attempts.
pub struct OutboxJobFactory<'a> {
    db: &'a DatabaseConnection,
    kind: String,
    payload: serde_json::Value,
    status: String,
    attempts: i32,
    next_attempt_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> OutboxJobFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            db,
            kind: kind.into(),
            payload,
            status: "PENDING".to_string(),
            attempts: 0,
            next_attempt_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn attempts(mut self, attempts: i32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn next_attempt_at(mut self, at: DateTime<Utc>) -> Self {
        self.next_attempt_at = at;
        self
    }

    pub fn completed_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.completed_at = at;
        self
    }

    pub async fn build(self) -> Result<entity::outbox_job::Model, DbErr> {
        entity::outbox_job::ActiveModel {
            kind: ActiveValue::Set(self.kind),
            payload: ActiveValue::Set(self.payload.to_string()),
            status: ActiveValue::Set(self.status),
            attempts: ActiveValue::Set(self.attempts),
            max_attempts: ActiveValue::Set(5),
            next_attempt_at: ActiveValue::Set(self.next_attempt_at),
            last_error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(self.completed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a due pending job of the given kind.
pub async fn create_outbox_job(
    db: &DatabaseConnection,
    kind: &str,
    payload: serde_json::Value,
) -> Result<entity::outbox_job::Model, DbErr> {
    OutboxJobFactory::new(db, kind, payload).build().await
}
