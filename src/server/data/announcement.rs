use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::announcement::CreateAnnouncementParams;

pub struct AnnouncementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnnouncementRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::announcement::Model>, DbErr> {
        entity::prelude::Announcement::find()
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::announcement::Model>, DbErr> {
        entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreateAnnouncementParams,
    ) -> Result<entity::announcement::Model, DbErr> {
        let (attachment_key, attachment_name) = match params.attachment {
            Some((key, name)) => (Some(key), Some(name)),
            None => (None, None),
        };

        entity::announcement::ActiveModel {
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            attachment_key: ActiveValue::Set(attachment_key),
            attachment_name: ActiveValue::Set(attachment_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
