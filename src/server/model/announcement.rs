use crate::{
    model::{
        announcement::{AnnouncementDto, CreateAnnouncementDto},
        api::FieldErrorDto,
    },
    server::{
        error::validation::ValidationError, model::check_length,
        service::storage::key_belongs_to,
    },
};

pub fn announcement_dto(announcement: entity::announcement::Model, body_html: String) -> AnnouncementDto {
    AnnouncementDto {
        id: announcement.id,
        title: announcement.title,
        body: announcement.body,
        body_html,
        attachment_name: announcement.attachment_name,
        created_at: announcement.created_at,
    }
}

#[derive(Debug, Clone)]
pub struct CreateAnnouncementParams {
    pub title: String,
    pub body: String,
    pub attachment: Option<(String, String)>,
}

impl CreateAnnouncementParams {
    /// Attachments must come from the author's own `/api/upload` prefix.
    pub fn from_dto(dto: CreateAnnouncementDto, author_id: i32) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        check_length(&mut errors, "title", "Title", &dto.title, 3, 200);
        check_length(&mut errors, "body", "Body", &dto.body, 1, 20_000);

        let attachment = match dto.attachment_key {
            Some(key) if !key.trim().is_empty() => {
                if !key_belongs_to(&key, "uploads", author_id) {
                    errors.push(FieldErrorDto::new(
                        "attachment_key",
                        "Attachment was not uploaded by you",
                    ));
                }
                let name = dto
                    .attachment_name
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| {
                        key.rsplit('/').next().unwrap_or("attachment").to_string()
                    });
                Some((key, name))
            }
            _ => None,
        };
        ValidationError::check(errors)?;

        Ok(Self {
            title: dto.title.trim().to_string(),
            body: dto.body,
            attachment,
        })
    }
}
