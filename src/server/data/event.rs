use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::event::CreateEventParams;

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All events, soonest first.
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::StartsAt)
            .order_by_asc(entity::event::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Inserts an event with registration open. A duplicate slug surfaces as a unique
    /// violation.
    pub async fn create(&self, params: CreateEventParams) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            slug: ActiveValue::Set(params.slug),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            venue: ActiveValue::Set(params.venue),
            fee: ActiveValue::Set(params.fee),
            team_event: ActiveValue::Set(params.team_event),
            min_team_size: ActiveValue::Set(params.min_team_size),
            max_team_size: ActiveValue::Set(params.max_team_size),
            registration_open: ActiveValue::Set(true),
            starts_at: ActiveValue::Set(params.starts_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn set_registration_open(
        &self,
        id: i32,
        open: bool,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(event) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = event.into_active_model();
        active.registration_open = ActiveValue::Set(open);
        Ok(Some(active.update(self.db).await?))
    }
}
