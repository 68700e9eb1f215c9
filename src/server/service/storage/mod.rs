//! Object storage behind a trait so services can be tested without a bucket.
//!
//! Keys are opaque strings. Private reads and all writes go through short-lived
//! signed URLs; public reads use the `https://<bucket>.<endpoint host>/<key>` template.

mod s3;

#[cfg(test)]
pub mod memory;

pub use s3::S3Storage;

use async_trait::async_trait;
use std::time::Duration;

use crate::server::error::storage::StorageError;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Signed URL the client can PUT the object to.
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError>;

    /// Signed URL the client can GET the object from.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, StorageError>;

    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>)
        -> Result<(), StorageError>;

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Unsigned public URL for the key.
    fn public_url(&self, key: &str) -> String;
}

/// Keeps ASCII letters, digits, `.`, `-` and `_`; everything else becomes `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let file = name.rsplit(&['/', '\\'][..]).next().unwrap_or(name);
    let sanitized: String = file
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.trim_matches('.').to_string();

    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized.chars().take(100).collect()
    }
}

/// `support/{user_id}/{uuid}-{sanitized name}`
pub fn support_key(user_id: i32, file_name: &str) -> String {
    format!(
        "support/{}/{}-{}",
        user_id,
        uuid::Uuid::new_v4(),
        sanitize_file_name(file_name)
    )
}

/// `payments/{user_id}/{uuid}.{ext}`
pub fn payment_key(user_id: i32, extension: &str) -> String {
    format!("payments/{}/{}.{}", user_id, uuid::Uuid::new_v4(), extension)
}

/// `uploads/{user_id}/{uuid}-{sanitized name}`
pub fn upload_key(user_id: i32, file_name: &str) -> String {
    format!(
        "uploads/{}/{}-{}",
        user_id,
        uuid::Uuid::new_v4(),
        sanitize_file_name(file_name)
    )
}

/// Whether `key` was issued to `user_id` under `prefix` (`support`, `payments`).
pub fn key_belongs_to(key: &str, prefix: &str, user_id: i32) -> bool {
    let expected = format!("{}/{}/", prefix, user_id);
    key.starts_with(&expected) && !key.contains("..") && key.len() > expected.len()
}
