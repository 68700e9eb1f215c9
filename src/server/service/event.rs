use sea_orm::DatabaseConnection;

use crate::{
    model::event::EventDto,
    server::{
        data::{event::EventRepository, is_unique_violation},
        error::AppError,
        model::{
            auth::Principal,
            event::{event_dto, CreateEventParams},
        },
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All events, soonest first.
    pub async fn list_events(&self) -> Result<Vec<EventDto>, AppError> {
        let events = EventRepository::new(self.db).get_all().await?;

        Ok(events.into_iter().map(event_dto).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<EventDto, AppError> {
        EventRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .map(event_dto)
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Creates an event with registration open.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The new event
    /// - `Err(AppError::AuthErr)` - Caller is not an admin
    /// - `Err(AppError::Conflict)` - Slug is already taken
    pub async fn create_event(
        &self,
        principal: &Principal,
        params: CreateEventParams,
    ) -> Result<EventDto, AppError> {
        principal.require_admin()?;

        match EventRepository::new(self.db).create(params).await {
            Ok(event) => Ok(event_dto(event)),
            Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(
                "An event with this slug already exists".to_string(),
            )),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn set_registration_open(
        &self,
        principal: &Principal,
        id: i32,
        open: bool,
    ) -> Result<EventDto, AppError> {
        principal.require_admin()?;

        EventRepository::new(self.db)
            .set_registration_open(id, open)
            .await?
            .map(event_dto)
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }
}
