//! Upload and viewing of stored files.
//!
//! Clients upload support attachments and payment screenshots straight to object
//! storage through pre-signed PUT URLs issued here, after the file passed the shared
//! attachment policy. Stored files are only ever read through short-lived signed GET
//! URLs, issued after checking that the caller may see the file.

use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::{
    model::{
        attachment::{display_mode_for_file, UploadPurpose},
        upload::{PresignUploadDto, PresignedUploadDto, UploadedFileDto, ViewAttachmentDto},
    },
    server::{
        data::{announcement::AnnouncementRepository, support::SupportRepository},
        error::{auth::AuthError, validation::ValidationError, AppError},
        model::auth::Principal,
        service::storage::{
            key_belongs_to, payment_key, sanitize_file_name, support_key, upload_key,
            ObjectStorage,
        },
    },
};

/// File extension stored for a payment screenshot of the given image type.
fn payment_extension(content_type: &str) -> &'static str {
    match content_type.to_lowercase().as_str() {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}

fn check_file(purpose: UploadPurpose, content_type: &str, size: u64) -> Result<(), ValidationError> {
    purpose
        .check(content_type, size)
        .map_err(|message| ValidationError::field("file", message))
}

pub struct UploadService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
    ttl: Duration,
}

impl<'a> UploadService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage, ttl: Duration) -> Self {
        Self { db, storage, ttl }
    }

    async fn presign(&self, key: String, content_type: &str) -> Result<PresignedUploadDto, AppError> {
        let upload_url = self.storage.presign_put(&key, content_type, self.ttl).await?;

        Ok(PresignedUploadDto {
            upload_url,
            public_url: self.storage.public_url(&key),
            key,
            expires_in: self.ttl.as_secs(),
        })
    }

    /// Issues an upload URL for a support attachment under `support/{user_id}/`.
    ///
    /// # Returns
    /// - `Ok(PresignedUploadDto)` - URL to PUT the file to and the key to submit
    /// - `Err(AppError::ValidationErr)` - File type or size is not allowed
    /// - `Err(AppError::StorageErr)` - Signing failed
    pub async fn presign_support_upload(
        &self,
        principal: &Principal,
        file: PresignUploadDto,
    ) -> Result<PresignedUploadDto, AppError> {
        check_file(UploadPurpose::Support, &file.content_type, file.size)?;

        let key = support_key(principal.user_id, &file.file_name);
        self.presign(key, &file.content_type).await
    }

    /// Issues an upload URL for a payment screenshot under `payments/{user_id}/`.
    pub async fn presign_payment_upload(
        &self,
        principal: &Principal,
        file: PresignUploadDto,
    ) -> Result<PresignedUploadDto, AppError> {
        check_file(UploadPurpose::Payment, &file.content_type, file.size)?;

        let key = payment_key(principal.user_id, payment_extension(&file.content_type));
        self.presign(key, &file.content_type).await
    }

    /// Stores a file received by the server under `uploads/{user_id}/`.
    pub async fn upload(
        &self,
        principal: &Principal,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFileDto, AppError> {
        let size = bytes.len() as u64;
        check_file(UploadPurpose::Support, content_type, size)?;

        let key = upload_key(principal.user_id, file_name);
        self.storage.put(&key, content_type, bytes).await?;

        Ok(UploadedFileDto {
            public_url: self.storage.public_url(&key),
            key,
            file_name: sanitize_file_name(file_name),
            content_type: content_type.to_string(),
            size,
        })
    }

    async fn signed_view(&self, key: &str, file_name: String) -> Result<ViewAttachmentDto, AppError> {
        let url = self.storage.presign_get(key, self.ttl).await?;

        Ok(ViewAttachmentDto {
            url,
            display_mode: display_mode_for_file(&file_name),
            file_name,
            expires_in: self.ttl.as_secs(),
        })
    }

    /// Signed URL for a stored file the caller may see.
    ///
    /// Ticket and response attachments are visible to the ticket owner and admins,
    /// except attachments on internal notes which only admins see. Payment
    /// screenshots are visible to their uploader and admins.
    ///
    /// # Returns
    /// - `Ok(ViewAttachmentDto)` - Signed URL and how to display the file
    /// - `Err(AppError::NotFound)` - No attachment with this key
    /// - `Err(AppError::AuthErr)` - Caller may not see the file
    pub async fn view_attachment(
        &self,
        principal: &Principal,
        key: &str,
    ) -> Result<ViewAttachmentDto, AppError> {
        if key.starts_with("payments/") {
            if !principal.admin && !key_belongs_to(key, "payments", principal.user_id) {
                return Err(AuthError::AccessDenied(
                    principal.user_id,
                    "not the owner of this payment screenshot".to_string(),
                )
                .into());
            }
            let file_name = key.rsplit('/').next().unwrap_or(key).to_string();
            return self.signed_view(key, file_name).await;
        }

        let owner = SupportRepository::new(self.db)
            .find_attachment_owner(key)
            .await?
            .ok_or_else(|| AppError::NotFound("Attachment not found".to_string()))?;

        if owner.internal {
            principal.require_admin()?;
        } else {
            principal.require_owner_or_admin(owner.ticket_owner_id, "attachment")?;
        }

        self.signed_view(key, owner.file_name).await
    }

    /// Signed URL for an announcement's attachment. Announcements are public.
    pub async fn view_announcement_attachment(
        &self,
        announcement_id: i32,
    ) -> Result<ViewAttachmentDto, AppError> {
        let announcement = AnnouncementRepository::new(self.db)
            .find_by_id(announcement_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;

        let Some(key) = announcement.attachment_key else {
            return Err(AppError::NotFound(
                "This announcement has no attachment".to_string(),
            ));
        };
        let file_name = announcement
            .attachment_name
            .unwrap_or_else(|| key.rsplit('/').next().unwrap_or("attachment").to_string());

        self.signed_view(&key, file_name).await
    }
}
