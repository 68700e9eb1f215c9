//! Participation factory for creating test registrations.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating participations.
///
/// The registrant snapshot is copied from the user, falling back to placeholder
/// phone and college values when the profile has none.
pub struct ParticipationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    event_id: i32,
    name: String,
    email: String,
    phone: String,
    college: String,
    status: String,
    payment_amount: Option<i32>,
    payment_screenshot_key: Option<String>,
    transaction_id: Option<String>,
    payment_submitted_at: Option<DateTime<Utc>>,
}

impl<'a> ParticipationFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        user: &entity::user::Model,
        event: &entity::event::Model,
    ) -> Self {
        Self {
            db,
            user_id: user.id,
            event_id: event.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_else(|| "9000000000".to_string()),
            college: user
                .college
                .clone()
                .unwrap_or_else(|| "Test College".to_string()),
            status: "REGISTERED".to_string(),
            payment_amount: None,
            payment_screenshot_key: None,
            transaction_id: None,
            payment_submitted_at: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Marks the participation as `PAYMENT_SUBMITTED` with the given screenshot key.
    pub fn payment_submitted(mut self, amount: i32, screenshot_key: impl Into<String>) -> Self {
        self.status = "PAYMENT_SUBMITTED".to_string();
        self.payment_amount = Some(amount);
        self.payment_screenshot_key = Some(screenshot_key.into());
        self.transaction_id = Some("TXN-TEST".to_string());
        self.payment_submitted_at = Some(Utc::now());
        self
    }

    pub fn payment_submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.payment_submitted_at = Some(at);
        self
    }

    pub async fn build(self) -> Result<entity::participation::Model, DbErr> {
        let now = Utc::now();
        entity::participation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            event_id: ActiveValue::Set(self.event_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            college: ActiveValue::Set(self.college),
            status: ActiveValue::Set(self.status),
            payment_amount: ActiveValue::Set(self.payment_amount),
            payment_screenshot_key: ActiveValue::Set(self.payment_screenshot_key),
            transaction_id: ActiveValue::Set(self.transaction_id),
            payment_submitted_at: ActiveValue::Set(self.payment_submitted_at),
            payment_verified_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `REGISTERED` participation for the user and event.
pub async fn create_participation(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    event: &entity::event::Model,
) -> Result<entity::participation::Model, DbErr> {
    ParticipationFactory::new(db, user, event).build().await
}
