//! Announcement factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an announcement, optionally pointing at an attachment key.
pub async fn create_announcement(
    db: &DatabaseConnection,
    title: &str,
    attachment_key: Option<&str>,
) -> Result<entity::announcement::Model, DbErr> {
    entity::announcement::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        body: ActiveValue::Set("Registrations close **Friday**.".to_string()),
        attachment_key: ActiveValue::Set(attachment_key.map(str::to_string)),
        attachment_name: ActiveValue::Set(
            attachment_key.and_then(|k| k.rsplit('/').next().map(str::to_string)),
        ),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
