//! Attachment rules shared by the client and the server.
//!
//! The client checks a file against these rules before requesting an upload URL and
//! picks a viewer from the extension; the server re-checks the same rules before
//! signing anything.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

pub const MB: u64 = 1024 * 1024;

/// Maximum number of attachments on a single ticket or response.
pub const MAX_ATTACHMENTS: usize = 5;

const IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

const DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "text/plain",
    "text/markdown",
    "text/csv",
    "application/json",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];

const MEDIA_TYPES: &[&str] = &["video/mp4", "video/webm", "audio/mpeg", "audio/wav"];

const PAYMENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// How the attachment viewer presents a file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Image,
    Pdf,
    Video,
    Audio,
    Text,
    Document,
    Download,
}

/// Extension table, checked in order. `ogg` appears under both video and audio and
/// resolves to video.
const DISPLAY_TABLE: &[(DisplayMode, &[&str])] = &[
    (DisplayMode::Image, &["jpg", "jpeg", "png", "gif", "webp", "svg"]),
    (DisplayMode::Pdf, &["pdf"]),
    (DisplayMode::Video, &["mp4", "webm", "ogg", "avi", "mov"]),
    (DisplayMode::Audio, &["mp3", "wav", "ogg", "aac"]),
    (DisplayMode::Text, &["txt", "md", "json", "xml", "csv"]),
    (
        DisplayMode::Document,
        &["doc", "docx", "xls", "xlsx", "ppt", "pptx"],
    ),
];

/// Classifies an extension. Case-insensitive, no content sniffing.
pub fn display_mode_for_extension(extension: &str) -> DisplayMode {
    let extension = extension.to_lowercase();
    DISPLAY_TABLE
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension.as_str()))
        .map(|(mode, _)| *mode)
        .unwrap_or(DisplayMode::Download)
}

/// Classifies a file name or storage key by its extension.
pub fn display_mode_for_file(name: &str) -> DisplayMode {
    extension(name)
        .map(|ext| display_mode_for_extension(&ext))
        .unwrap_or(DisplayMode::Download)
}

/// Lowercased extension of the last path segment, if any.
pub fn extension(name: &str) -> Option<String> {
    let file = name.rsplit('/').next().unwrap_or(name);
    let (stem, ext) = file.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// What an upload is for; decides the allow-list and size cap.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UploadPurpose {
    Support,
    Payment,
}

impl UploadPurpose {
    pub fn max_size(self) -> u64 {
        match self {
            Self::Support => 10 * MB,
            Self::Payment => 5 * MB,
        }
    }

    pub fn allows(self, content_type: &str) -> bool {
        let content_type = content_type.to_lowercase();
        let content_type = content_type.as_str();
        match self {
            Self::Support => {
                IMAGE_TYPES.contains(&content_type)
                    || DOCUMENT_TYPES.contains(&content_type)
                    || MEDIA_TYPES.contains(&content_type)
            }
            Self::Payment => PAYMENT_TYPES.contains(&content_type),
        }
    }

    /// Checks a file against the allow-list and size cap, returning a user facing
    /// message on rejection.
    pub fn check(self, content_type: &str, size: u64) -> Result<(), String> {
        if !self.allows(content_type) {
            return Err(match self {
                Self::Support => format!("File type {} is not allowed", content_type),
                Self::Payment => "Payment screenshot must be a JPEG, PNG or WebP image".to_string(),
            });
        }
        if size == 0 {
            return Err("File is empty".to_string());
        }
        if size > self.max_size() {
            return Err(format!(
                "File is too large, maximum size is {} MB",
                self.max_size() / MB
            ));
        }
        Ok(())
    }
}
