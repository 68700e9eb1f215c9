//! Transactional email.
//!
//! Services never send mail inline; they enqueue outbox jobs and the dispatcher
//! renders a template and hands it to a `Mailer`.

mod log_only;
mod smtp;
pub mod template;

#[cfg(test)]
pub mod recording;

pub use log_only::LogMailer;
pub use smtp::SmtpMailer;

use async_trait::async_trait;

use crate::server::error::email::EmailError;

#[derive(Debug, Clone, PartialEq)]
pub struct EmailAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<EmailAttachment>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError>;
}
