use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::MailConfig,
    error::email::EmailError,
    service::email::{Mailer, OutgoingEmail},
};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds a STARTTLS transport for `host`. Credentials are only attached when
    /// both username and password are configured.
    pub fn new(config: &MailConfig, host: &str) -> Result<Self, EmailError> {
        let from = parse_mailbox(&config.from)?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| EmailError::Transport(format!("SMTP relay error: {e}")))?
            .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| EmailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// Builds the MIME message: an HTML part followed by one part per attachment.
pub(super) fn build_message(from: Mailbox, email: OutgoingEmail) -> Result<Message, EmailError> {
    let to = parse_mailbox(&email.to)?;

    let mut body = MultiPart::mixed().singlepart(SinglePart::html(email.html));
    for attachment in email.attachments {
        let content_type = ContentType::parse(&attachment.content_type)
            .map_err(|e| EmailError::Build(format!("Invalid content type: {e}")))?;
        body = body.singlepart(Attachment::new(attachment.file_name).body(attachment.bytes, content_type));
    }

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject)
        .multipart(body)
        .map_err(|e| EmailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        let message = build_message(self.from.clone(), email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| EmailError::Transport(format!("Failed to send email: {e}")))?;

        Ok(())
    }
}
