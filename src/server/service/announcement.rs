use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::announcement::{render_markdown, AnnouncementDto},
    server::{
        data::announcement::AnnouncementRepository,
        error::AppError,
        model::{
            announcement::{announcement_dto, CreateAnnouncementParams},
            auth::Principal,
        },
        service::storage::ObjectStorage,
    },
};

fn to_dto(announcement: entity::announcement::Model) -> AnnouncementDto {
    let body_html = render_markdown(&announcement.body);
    announcement_dto(announcement, body_html)
}

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    /// All announcements, newest first, with the markdown body rendered to HTML.
    pub async fn list(&self) -> Result<Vec<AnnouncementDto>, AppError> {
        let announcements = AnnouncementRepository::new(self.db).get_all().await?;

        Ok(announcements.into_iter().map(to_dto).collect())
    }

    pub async fn create(
        &self,
        principal: &Principal,
        params: CreateAnnouncementParams,
    ) -> Result<AnnouncementDto, AppError> {
        principal.require_admin()?;

        let announcement = AnnouncementRepository::new(self.db).create(params).await?;

        Ok(to_dto(announcement))
    }

    /// Deletes an announcement, then its attachment object.
    ///
    /// Removing the object is best effort: a storage failure is logged and the
    /// announcement stays deleted.
    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), AppError> {
        principal.require_admin()?;

        let repo = AnnouncementRepository::new(self.db);
        let announcement = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound("Announcement not found".to_string()));
        }

        if let Some(key) = announcement.attachment_key {
            if let Err(e) = self.storage.delete(&key).await {
                tracing::warn!(
                    "Failed to delete attachment {} of announcement {}: {}",
                    key,
                    id,
                    e
                );
            }
        }

        Ok(())
    }
}
