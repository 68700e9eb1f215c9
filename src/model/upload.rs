use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::attachment::DisplayMode;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PresignUploadDto {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PresignedUploadDto {
    /// Pre-signed PUT URL the client uploads the file to.
    pub upload_url: String,
    pub key: String,
    pub public_url: String,
    pub expires_in: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UploadedFileDto {
    pub key: String,
    pub public_url: String,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ViewAttachmentDto {
    /// Short-lived signed GET URL.
    pub url: String,
    pub file_name: String,
    pub display_mode: DisplayMode,
    pub expires_in: u64,
}
