//! Outbox dispatcher.
//!
//! Drains due jobs written by the other services: each job is claimed, turned into an
//! email (rendering PDF invoices and fetching ticket attachments as needed) and
//! handed to the mailer. Failures are retried with exponential backoff until the
//! job's attempt budget runs out.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        accommodation::AccommodationRepository, outbox::OutboxRepository,
        participation::ParticipationRepository, support::SupportRepository,
        user::UserRepository,
    },
    error::AppError,
    model::outbox::{retry_decision, OutboxMessage, RetryDecision},
    service::{
        document::{
            render_accommodation_invoice, render_registration_invoice, AccommodationInvoice,
            RegistrationInvoice,
        },
        email::{
            template::{self, RenderedEmail},
            EmailAttachment, Mailer, OutgoingEmail,
        },
        storage::ObjectStorage,
    },
};

/// Jobs handled per dispatch run.
const BATCH_SIZE: u64 = 20;

/// Outcome counts of one dispatch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub sent: usize,
    pub retried: usize,
    pub failed: usize,
}

/// Why building or sending a job's email failed.
enum JobError {
    /// The job can never succeed, e.g. its payload or referenced row is gone.
    Permanent(String),
    Transient(String),
}

impl From<AppError> for JobError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(msg) => JobError::Permanent(msg),
            err => JobError::Transient(err.to_string()),
        }
    }
}

fn pdf(file_name: String, bytes: Vec<u8>) -> EmailAttachment {
    EmailAttachment {
        file_name,
        content_type: "application/pdf".to_string(),
        bytes,
    }
}

pub struct OutboxService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
    mailer: &'a dyn Mailer,
    app_url: &'a str,
}

impl<'a> OutboxService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        storage: &'a dyn ObjectStorage,
        mailer: &'a dyn Mailer,
        app_url: &'a str,
    ) -> Self {
        Self {
            db,
            storage,
            mailer,
            app_url,
        }
    }

    /// Dispatches jobs due at `now`.
    ///
    /// Jobs leased by a concurrent run are skipped. A job whose payload cannot be
    /// decoded or whose referenced row no longer exists is failed immediately. When a
    /// job's outcome cannot be recorded it is logged and left leased; it becomes due
    /// again when the lease runs out.
    ///
    /// # Returns
    /// - `Ok(DispatchSummary)` - Counts of sent, rescheduled and failed jobs
    /// - `Err(AppError::DbErr)` - Database error reading the due jobs
    pub async fn dispatch_pending(&self, now: DateTime<Utc>) -> Result<DispatchSummary, AppError> {
        let repo = OutboxRepository::new(self.db);
        let mut summary = DispatchSummary::default();

        for job in repo.get_due(now, BATCH_SIZE).await? {
            match repo.claim(job.id, now).await {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::error!("Failed to claim outbox job {}: {}", job.id, e);
                    continue;
                }
            }

            let result = match serde_json::from_str::<OutboxMessage>(&job.payload) {
                Ok(message) => self.deliver(&message).await,
                Err(e) => Err(JobError::Permanent(format!("Invalid payload: {}", e))),
            };

            if let Err(e) = self.settle(&repo, &job, result, now, &mut summary).await {
                tracing::error!(
                    "Failed to record outcome of outbox job {} ({}): {}",
                    job.id,
                    job.kind,
                    e
                );
            }
        }

        Ok(summary)
    }

    /// Records the outcome of one delivery attempt.
    async fn settle(
        &self,
        repo: &OutboxRepository<'_, DatabaseConnection>,
        job: &entity::outbox_job::Model,
        result: Result<(), JobError>,
        now: DateTime<Utc>,
        summary: &mut DispatchSummary,
    ) -> Result<(), DbErr> {
        let attempts = job.attempts + 1;

        match result {
            Ok(()) => {
                repo.mark_done(job.id, attempts, now).await?;
                summary.sent += 1;
                tracing::info!("Outbox job {} ({}) sent", job.id, job.kind);
            }
            Err(JobError::Permanent(error)) => {
                repo.mark_failed(job.id, attempts, &error).await?;
                summary.failed += 1;
                tracing::error!("Outbox job {} ({}) failed: {}", job.id, job.kind, error);
            }
            Err(JobError::Transient(error)) => {
                match retry_decision(job.attempts, job.max_attempts, now) {
                    RetryDecision::Retry { at } => {
                        repo.mark_retry(job.id, attempts, at, &error).await?;
                        summary.retried += 1;
                        tracing::warn!(
                            "Outbox job {} ({}) attempt {} failed, retrying at {}: {}",
                            job.id,
                            job.kind,
                            attempts,
                            at,
                            error
                        );
                    }
                    RetryDecision::GiveUp => {
                        repo.mark_failed(job.id, attempts, &error).await?;
                        summary.failed += 1;
                        tracing::error!(
                            "Outbox job {} ({}) failed after {} attempts: {}",
                            job.id,
                            job.kind,
                            attempts,
                            error
                        );
                    }
                }
            }
        }

        Ok(())
    }

    async fn deliver(&self, message: &OutboxMessage) -> Result<(), JobError> {
        let email = self.build_email(message).await?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| JobError::Transient(e.to_string()))
    }

    async fn build_email(&self, message: &OutboxMessage) -> Result<OutgoingEmail, AppError> {
        match *message {
            OutboxMessage::RegistrationConfirmation { participation_id } => {
                self.registration_email(participation_id).await
            }
            OutboxMessage::AccommodationConfirmation { booking_id } => {
                self.accommodation_email(booking_id).await
            }
            OutboxMessage::TicketResponse { response_id } => {
                self.ticket_response_email(response_id).await
            }
            OutboxMessage::TicketCreated { ticket_id } => self.ticket_created_email(ticket_id).await,
        }
    }

    async fn registration_email(&self, participation_id: i32) -> Result<OutgoingEmail, AppError> {
        let (participation, event) = ParticipationRepository::new(self.db)
            .find_with_event(participation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Participation {} not found", participation_id))
            })?;
        let event = event.ok_or_else(|| {
            AppError::NotFound(format!("Event {} not found", participation.event_id))
        })?;

        // Free events carry no amount and no invoice.
        let amount = participation.payment_amount.filter(|amount| *amount > 0);

        let RenderedEmail { subject, html } =
            template::registration_confirmation(&template::RegistrationEmail {
                name: &participation.name,
                event_name: &event.name,
                starts_at: event.starts_at,
                venue: event.venue.as_deref(),
                amount,
                app_url: self.app_url,
            });

        let mut attachments = Vec::new();
        if let Some(amount) = amount {
            let invoice_number = format!("REG-{:06}", participation.id);
            let bytes = render_registration_invoice(&RegistrationInvoice {
                invoice_number: invoice_number.clone(),
                issued_on: participation.payment_verified_at.unwrap_or_else(Utc::now),
                participant_name: participation.name.clone(),
                email: participation.email.clone(),
                phone: participation.phone.clone(),
                college: participation.college.clone(),
                event_name: event.name.clone(),
                venue: event.venue.clone(),
                starts_at: event.starts_at,
                amount,
                transaction_id: participation.transaction_id.clone(),
            })?;
            attachments.push(pdf(format!("{}.pdf", invoice_number), bytes));
        }

        Ok(OutgoingEmail {
            to: participation.email,
            subject,
            html,
            attachments,
        })
    }

    async fn accommodation_email(&self, booking_id: i32) -> Result<OutgoingEmail, AppError> {
        let (booking, stay) = AccommodationRepository::new(self.db)
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;
        let stay =
            stay.ok_or_else(|| AppError::NotFound(format!("Stay {} not found", booking.stay_id)))?;

        let RenderedEmail { subject, html } =
            template::accommodation_confirmation(&template::AccommodationEmail {
                name: &booking.name,
                place: &stay.place,
                check_in: booking.check_in,
                check_out: booking.check_out,
                guests: booking.guests,
                amount: booking.amount,
            });

        let invoice_number = format!("ACC-{:06}", booking.id);
        let bytes = render_accommodation_invoice(&AccommodationInvoice {
            invoice_number: invoice_number.clone(),
            issued_on: booking.payment_verified_at.unwrap_or_else(Utc::now),
            guest_name: booking.name.clone(),
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            place: stay.place.clone(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            guests: booking.guests,
            rate: stay.price,
            amount: booking.amount,
            transaction_id: booking.transaction_id.clone(),
        })?;

        Ok(OutgoingEmail {
            to: booking.email,
            subject,
            html,
            attachments: vec![pdf(format!("{}.pdf", invoice_number), bytes)],
        })
    }

    async fn ticket_owner(
        &self,
        ticket_id: i32,
    ) -> Result<(entity::support_ticket::Model, entity::user::Model), AppError> {
        let ticket = SupportRepository::new(self.db)
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", ticket_id)))?;
        let owner = UserRepository::new(self.db)
            .find_by_id(ticket.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", ticket.user_id)))?;

        Ok((ticket, owner))
    }

    async fn ticket_response_email(&self, response_id: i32) -> Result<OutgoingEmail, AppError> {
        let repo = SupportRepository::new(self.db);

        let response = repo
            .find_response(response_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Response {} not found", response_id)))?;
        let (ticket, owner) = self.ticket_owner(response.ticket_id).await?;

        let RenderedEmail { subject, html } = template::ticket_response(&template::TicketResponseEmail {
            name: &owner.name,
            ticket_number: &ticket.ticket_number,
            subject: &ticket.subject,
            message: &response.message,
            app_url: self.app_url,
        });

        let mut attachments = Vec::new();
        for attachment in repo.get_response_attachments(vec![response.id]).await? {
            let bytes = self.storage.get(&attachment.storage_key).await?;
            attachments.push(EmailAttachment {
                file_name: attachment.file_name,
                content_type: attachment.content_type,
                bytes,
            });
        }

        Ok(OutgoingEmail {
            to: owner.email,
            subject,
            html,
            attachments,
        })
    }

    async fn ticket_created_email(&self, ticket_id: i32) -> Result<OutgoingEmail, AppError> {
        let (ticket, owner) = self.ticket_owner(ticket_id).await?;

        let RenderedEmail { subject, html } = template::ticket_created(&template::TicketCreatedEmail {
            name: &owner.name,
            ticket_number: &ticket.ticket_number,
            subject: &ticket.subject,
            app_url: self.app_url,
        });

        Ok(OutgoingEmail {
            to: owner.email,
            subject,
            html,
            attachments: Vec::new(),
        })
    }
}
