use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::server::{
    error::email::EmailError,
    service::email::{Mailer, OutgoingEmail},
};

/// Used when `SMTP_HOST` is not set: logs the email instead of sending it.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        tracing::info!(
            "Email to {} (SMTP not configured): {} [{} attachment(s)]",
            email.to,
            email.subject,
            email.attachments.len()
        );
        Ok(())
    }
}
