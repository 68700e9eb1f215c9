//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events.
///
/// Defaults to an individual, open, paid event (fee 200) starting in a week.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    name: String,
    fee: i32,
    team_event: bool,
    min_team_size: i32,
    max_team_size: i32,
    registration_open: bool,
    starts_at: DateTime<Utc>,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("event-{}", id),
            name: format!("Event {}", id),
            fee: 200,
            team_event: false,
            min_team_size: 1,
            max_team_size: 1,
            registration_open: true,
            starts_at: Utc::now() + Duration::days(7),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn fee(mut self, fee: i32) -> Self {
        self.fee = fee;
        self
    }

    /// Marks the event as a team event with the given size bounds.
    pub fn team(mut self, min_team_size: i32, max_team_size: i32) -> Self {
        self.team_event = true;
        self.min_team_size = min_team_size;
        self.max_team_size = max_team_size;
        self
    }

    pub fn registration_open(mut self, open: bool) -> Self {
        self.registration_open = open;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("A test event".to_string()),
            venue: ActiveValue::Set(Some("Main Auditorium".to_string())),
            fee: ActiveValue::Set(self.fee),
            team_event: ActiveValue::Set(self.team_event),
            min_team_size: ActiveValue::Set(self.min_team_size),
            max_team_size: ActiveValue::Set(self.max_team_size),
            registration_open: ActiveValue::Set(self.registration_open),
            starts_at: ActiveValue::Set(self.starts_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an individual paid event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}

/// Creates a team event allowing teams of 2 to 4.
pub async fn create_team_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).team(2, 4).build().await
}
