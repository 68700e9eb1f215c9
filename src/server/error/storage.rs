use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to presign {operation} for '{key}': {reason}")]
    Presign {
        operation: &'static str,
        key: String,
        reason: String,
    },

    #[error("Failed to upload '{key}': {reason}")]
    Upload { key: String, reason: String },

    #[error("Failed to download '{key}': {reason}")]
    Download { key: String, reason: String },

    #[error("Object '{0}' does not exist")]
    NotFound(String),
}
