//! Support ticket lifecycle.
//!
//! Tickets are identified externally by a ticket number of the form
//! `INSP-<base36 millisecond timestamp>-<4 random base36 characters>`. Internal notes
//! are staff-only responses and are never shown to, counted for, or emailed to the
//! ticket owner.

use chrono::{DateTime, Utc};
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::{
    model::{
        api::PageDto,
        support::{
            CreatedTicketDto, ResponseDto, TicketDetailDto, TicketPriority, TicketStatus,
            TicketSummaryDto,
        },
    },
    server::{
        data::{
            is_unique_violation,
            outbox::OutboxRepository,
            support::{NewTicket, SupportRepository, TicketChanges},
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            auth::Principal,
            outbox::OutboxMessage,
            support::{
                parse_ticket_status, response_dto, ticket_attachment_dto, ticket_summary_dto,
                CreateResponseParams, CreateTicketParams, TicketFilter,
            },
        },
    },
};

const TICKET_PREFIX: &str = "INSP";
const TICKET_NUMBER_ATTEMPTS: usize = 5;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Builds a candidate ticket number. Uniqueness is checked by the caller.
pub fn generate_ticket_number<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    let millis = now.timestamp_millis().max(0) as u64;
    let suffix: String = (0..4)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();

    format!("{}-{}-{}", TICKET_PREFIX, to_base36(millis), suffix)
}

/// Status after a response is added. Only a public response on an open ticket
/// moves it forward.
pub fn status_after_response(current: TicketStatus, is_internal: bool) -> TicketStatus {
    if !is_internal && current == TicketStatus::Open {
        TicketStatus::InProgress
    } else {
        current
    }
}

/// Source of candidate ticket numbers.
type TicketNumbers<'a> = Box<dyn Fn() -> String + Send + Sync + 'a>;

pub struct SupportService<'a> {
    db: &'a DatabaseConnection,
    next_ticket_number: TicketNumbers<'a>,
}

impl<'a> SupportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            next_ticket_number: Box::new(|| generate_ticket_number(Utc::now(), &mut rand::rng())),
        }
    }

    /// Replaces the ticket number source, e.g. with a fixed sequence.
    pub fn with_ticket_numbers(mut self, numbers: impl Fn() -> String + Send + Sync + 'a) -> Self {
        self.next_ticket_number = Box::new(numbers);
        self
    }

    async fn find_ticket(&self, number: &str) -> Result<entity::support_ticket::Model, AppError> {
        SupportRepository::new(self.db)
            .find_by_number(number)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))
    }

    /// Opens a ticket with its attachments and queues an acknowledgement email.
    ///
    /// A ticket number is drawn up to five times until an unused one is found. The
    /// ticket and its attachments are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(CreatedTicketDto)` - Number of the new ticket
    /// - `Err(AppError::Conflict)` - No free ticket number could be allocated
    /// - `Err(AppError::DbErr)` - Database error, nothing is written
    pub async fn create_ticket(
        &self,
        principal: &Principal,
        params: CreateTicketParams,
    ) -> Result<CreatedTicketDto, AppError> {
        let txn = self.db.begin().await?;
        let repo = SupportRepository::new(&txn);

        let mut ticket_number = None;
        for _ in 0..TICKET_NUMBER_ATTEMPTS {
            let candidate = (self.next_ticket_number)();
            if !repo.ticket_number_exists(&candidate).await? {
                ticket_number = Some(candidate);
                break;
            }
        }
        let Some(ticket_number) = ticket_number else {
            return Err(AppError::Conflict(
                "Could not allocate a ticket number, please try again".to_string(),
            ));
        };

        let ticket = repo
            .create_ticket(NewTicket {
                ticket_number,
                user_id: principal.user_id,
                subject: params.subject,
                message: params.message,
                category: params.category,
                priority: params.priority,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AppError::Conflict("Could not allocate a ticket number, please try again".to_string())
                } else {
                    err.into()
                }
            })?;
        repo.add_ticket_attachments(ticket.id, &params.attachments)
            .await?;

        OutboxRepository::new(&txn)
            .enqueue(
                &OutboxMessage::TicketCreated {
                    ticket_id: ticket.id,
                },
                Utc::now(),
            )
            .await?;

        txn.commit().await?;

        Ok(CreatedTicketDto {
            ticket_number: ticket.ticket_number,
        })
    }

    /// The caller's tickets, most recently updated first.
    pub async fn list_mine(&self, principal: &Principal) -> Result<Vec<TicketSummaryDto>, AppError> {
        let repo = SupportRepository::new(self.db);

        let tickets = repo.get_by_user(principal.user_id).await?;
        let counts = repo
            .public_response_counts(tickets.iter().map(|t| t.id).collect())
            .await?;

        Ok(tickets
            .iter()
            .map(|t| ticket_summary_dto(t, counts.get(&t.id).copied().unwrap_or(0)))
            .collect())
    }

    /// Ticket thread for its owner or an admin. Internal notes are only included for
    /// admins.
    pub async fn get_ticket(
        &self,
        principal: &Principal,
        number: &str,
    ) -> Result<TicketDetailDto, AppError> {
        let ticket = self.find_ticket(number).await?;
        principal.require_owner_or_admin(ticket.user_id, "ticket")?;

        let repo = SupportRepository::new(self.db);
        let attachments = repo.get_ticket_attachments(ticket.id).await?;
        let responses = repo.get_responses(ticket.id, principal.admin).await?;

        let mut response_attachments: HashMap<i32, Vec<_>> = HashMap::new();
        for attachment in repo
            .get_response_attachments(responses.iter().map(|r| r.id).collect())
            .await?
        {
            response_attachments
                .entry(attachment.response_id)
                .or_default()
                .push(attachment);
        }

        let mut author_ids: Vec<i32> = responses.iter().map(|r| r.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors: HashMap<i32, entity::user::Model> = UserRepository::new(self.db)
            .find_by_ids(author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let public_count = responses.iter().filter(|r| !r.is_internal).count() as u64;
        let responses: Vec<ResponseDto> = responses
            .into_iter()
            .map(|response| {
                let attachments = response_attachments.remove(&response.id).unwrap_or_default();
                let author = authors.get(&response.author_id);
                response_dto(response, author, attachments)
            })
            .collect();

        Ok(TicketDetailDto {
            ticket: ticket_summary_dto(&ticket, public_count),
            message: ticket.message,
            attachments: attachments.into_iter().map(ticket_attachment_dto).collect(),
            responses,
        })
    }

    /// Adds a response to a ticket.
    ///
    /// The owner may only post public responses; admins may also post internal
    /// notes. A public response on an `OPEN` ticket moves it to `IN_PROGRESS`. A
    /// public response from an admin queues an email to the ticket owner.
    ///
    /// # Returns
    /// - `Ok(ResponseDto)` - The stored response
    /// - `Err(AppError::NotFound)` - Ticket does not exist
    /// - `Err(AppError::AuthErr)` - Caller is neither owner nor admin, or a non-admin
    ///   posted an internal note
    /// - `Err(AppError::BadRequest)` - Ticket is closed
    pub async fn add_response(
        &self,
        principal: &Principal,
        number: &str,
        params: CreateResponseParams,
    ) -> Result<ResponseDto, AppError> {
        let ticket = self.find_ticket(number).await?;
        principal.require_owner_or_admin(ticket.user_id, "ticket")?;

        if params.is_internal && !principal.admin {
            return Err(AuthError::AccessDenied(
                principal.user_id,
                "internal notes are for staff only".to_string(),
            )
            .into());
        }

        let current = parse_ticket_status(&ticket.status);
        if current == TicketStatus::Closed {
            return Err(AppError::BadRequest(
                "This ticket is closed and no longer accepts responses".to_string(),
            ));
        }

        let author = UserRepository::new(self.db)
            .find_by_id(principal.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(principal.user_id))?;

        let now = Utc::now();
        let notify_owner = principal.admin && !params.is_internal && ticket.user_id != author.id;
        let next = status_after_response(current, params.is_internal);

        let txn = self.db.begin().await?;
        let repo = SupportRepository::new(&txn);

        let response = repo
            .create_response(ticket.id, author.id, params.message, params.is_internal)
            .await?;
        repo.add_response_attachments(response.id, &params.attachments)
            .await?;
        repo.update_ticket(
            ticket,
            TicketChanges {
                status: (next != current).then_some(next),
                ..Default::default()
            },
            now,
        )
        .await?;

        if notify_owner {
            OutboxRepository::new(&txn)
                .enqueue(
                    &OutboxMessage::TicketResponse {
                        response_id: response.id,
                    },
                    now,
                )
                .await?;
        }

        let attachments = repo.get_response_attachments(vec![response.id]).await?;
        txn.commit().await?;

        Ok(response_dto(response, Some(&author), attachments))
    }

    /// Changes status and/or priority of a ticket.
    ///
    /// Moving to `RESOLVED` stamps `resolved_at`; moving anywhere else keeps a
    /// previously stamped value.
    pub async fn update_ticket(
        &self,
        principal: &Principal,
        number: &str,
        status: Option<TicketStatus>,
        priority: Option<TicketPriority>,
    ) -> Result<TicketSummaryDto, AppError> {
        principal.require_admin()?;

        if status.is_none() && priority.is_none() {
            return Err(AppError::BadRequest("Nothing to update".to_string()));
        }

        let ticket = self.find_ticket(number).await?;
        let now = Utc::now();
        let repo = SupportRepository::new(self.db);

        let ticket = repo
            .update_ticket(
                ticket,
                TicketChanges {
                    status,
                    priority,
                    resolved_at: (status == Some(TicketStatus::Resolved)).then_some(now),
                },
                now,
            )
            .await?;
        let count = repo
            .public_response_counts(vec![ticket.id])
            .await?
            .get(&ticket.id)
            .copied()
            .unwrap_or(0);

        Ok(ticket_summary_dto(&ticket, count))
    }

    /// Filtered page of tickets for the admin queue. `page` is one-based.
    pub async fn list_for_admin(
        &self,
        principal: &Principal,
        filter: TicketFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PageDto<TicketSummaryDto>, AppError> {
        principal.require_admin()?;

        let page = page.max(1);
        let repo = SupportRepository::new(self.db);
        let (tickets, total) = repo.get_paginated(&filter, page - 1, per_page).await?;
        let counts = repo
            .public_response_counts(tickets.iter().map(|t| t.id).collect())
            .await?;

        Ok(PageDto {
            items: tickets
                .iter()
                .map(|t| ticket_summary_dto(t, counts.get(&t.id).copied().unwrap_or(0)))
                .collect(),
            total,
            page,
            per_page,
        })
    }
}
