use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating the schema failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The session store could not be migrated.
    #[error("Failed to initialize session store: {0}")]
    SessionStore(String),

    /// Serializing a fixture payload failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
