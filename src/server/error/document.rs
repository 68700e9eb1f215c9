use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to load font: {0}")]
    Font(String),

    #[error("Failed to render PDF: {0}")]
    Render(String),
}
