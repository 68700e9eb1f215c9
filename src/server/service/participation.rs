//! Registration and payment workflow.
//!
//! A registration moves `REGISTERED -> PAYMENT_SUBMITTED -> CONFIRMED`, or to
//! `CANCELLED` from any earlier state. Free events skip payment and are confirmed on
//! registration. Confirmation emails are queued in the outbox inside the same
//! transaction that confirms the registration.
//!
//! The unique (user, event) index decides whether a user is already registered. The
//! lookup before insert only saves a round trip in the common case; a concurrent
//! duplicate that slips past it fails the insert and is reported the same way.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        participation::{ParticipationDto, ParticipationStatus},
    },
    server::{
        data::{
            event::EventRepository,
            is_unique_violation,
            outbox::OutboxRepository,
            participation::{NewParticipation, ParticipationRepository},
            team::TeamRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            auth::Principal,
            outbox::OutboxMessage,
            participation::{
                parse_status, participation_dto, CheckoutParams, ParticipationFilter,
                RegistrationParams, ReuploadPaymentParams,
            },
        },
    },
};

const ALREADY_REGISTERED: &str = "You are already registered for this event";

fn map_duplicate(err: DbErr) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(ALREADY_REGISTERED.to_string())
    } else {
        err.into()
    }
}

pub struct ParticipationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn open_event(&self, event_id: i32) -> Result<entity::event::Model, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if !event.registration_open {
            return Err(AppError::BadRequest(
                "Registration for this event is closed".to_string(),
            ));
        }

        Ok(event)
    }

    async fn ensure_not_registered(&self, user_id: i32, event_id: i32) -> Result<(), AppError> {
        let existing = ParticipationRepository::new(self.db)
            .find_by_user_and_event(user_id, event_id)
            .await?;

        if existing.is_some() {
            return Err(AppError::Conflict(ALREADY_REGISTERED.to_string()));
        }

        Ok(())
    }

    /// Registers the caller for an event.
    ///
    /// Paid events start at `REGISTERED` and wait for a payment. Free events are
    /// confirmed immediately and a confirmation email is queued.
    ///
    /// # Returns
    /// - `Ok(ParticipationDto)` - The new registration
    /// - `Err(AppError::NotFound)` - Event does not exist
    /// - `Err(AppError::BadRequest)` - Registration is closed
    /// - `Err(AppError::Conflict)` - Caller is already registered
    pub async fn register(
        &self,
        principal: &Principal,
        event_id: i32,
        params: RegistrationParams,
    ) -> Result<ParticipationDto, AppError> {
        let event = self.open_event(event_id).await?;
        self.ensure_not_registered(principal.user_id, event.id).await?;

        let now = Utc::now();
        let free = event.fee == 0;
        let status = if free {
            ParticipationStatus::Confirmed
        } else {
            ParticipationStatus::Registered
        };

        let txn = self.db.begin().await?;

        let participation = ParticipationRepository::new(&txn)
            .create(NewParticipation {
                user_id: principal.user_id,
                event_id: event.id,
                snapshot: params.snapshot,
                status,
                payment_amount: None,
                payment_screenshot_key: None,
                transaction_id: None,
                payment_submitted_at: None,
                payment_verified_at: free.then_some(now),
            })
            .await
            .map_err(map_duplicate)?;

        if free {
            OutboxRepository::new(&txn)
                .enqueue(
                    &OutboxMessage::RegistrationConfirmation {
                        participation_id: participation.id,
                    },
                    now,
                )
                .await?;
        }

        txn.commit().await?;

        Ok(participation_dto(participation, Some(&event), None))
    }

    /// Registers the caller and records their payment in one step.
    ///
    /// The registration is created directly in `PAYMENT_SUBMITTED` with the event fee
    /// as the amount. Nothing is written when the caller is already registered.
    ///
    /// # Returns
    /// - `Ok(ParticipationDto)` - The new registration awaiting verification
    /// - `Err(AppError::NotFound)` - Event does not exist
    /// - `Err(AppError::BadRequest)` - Registration is closed or the event is free
    /// - `Err(AppError::Conflict)` - Caller is already registered
    pub async fn checkout(
        &self,
        principal: &Principal,
        event_id: i32,
        params: CheckoutParams,
    ) -> Result<ParticipationDto, AppError> {
        let event = self.open_event(event_id).await?;
        if event.fee == 0 {
            return Err(AppError::BadRequest(
                "This event is free, register without a payment".to_string(),
            ));
        }
        self.ensure_not_registered(principal.user_id, event.id).await?;

        let participation = ParticipationRepository::new(self.db)
            .create(NewParticipation {
                user_id: principal.user_id,
                event_id: event.id,
                snapshot: params.snapshot,
                status: ParticipationStatus::PaymentSubmitted,
                payment_amount: Some(event.fee),
                payment_screenshot_key: Some(params.screenshot_key),
                transaction_id: params.transaction_id,
                payment_submitted_at: Some(Utc::now()),
                payment_verified_at: None,
            })
            .await
            .map_err(map_duplicate)?;

        Ok(participation_dto(participation, Some(&event), None))
    }

    /// Replaces the payment screenshot on one of the caller's registrations.
    ///
    /// # Returns
    /// - `Ok(ParticipationDto)` - Registration in `PAYMENT_SUBMITTED`
    /// - `Err(AppError::NotFound)` - Registration does not exist
    /// - `Err(AppError::AuthErr)` - Registration belongs to someone else
    /// - `Err(AppError::BadRequest)` - Registration is confirmed or cancelled
    pub async fn reupload_payment(
        &self,
        principal: &Principal,
        params: ReuploadPaymentParams,
    ) -> Result<ParticipationDto, AppError> {
        let repo = ParticipationRepository::new(self.db);

        let (participation, event) = repo
            .find_with_event(params.participation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

        if participation.user_id != principal.user_id {
            return Err(AuthError::AccessDenied(
                principal.user_id,
                format!("not the owner of registration {}", participation.id),
            )
            .into());
        }

        let event =
            event.ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        let status = parse_status(&participation.status);
        if !status.can_transition_to(ParticipationStatus::PaymentSubmitted, event.fee == 0) {
            return Err(AppError::BadRequest(
                "The payment for this registration can no longer be changed".to_string(),
            ));
        }

        let participation = repo
            .submit_payment(
                participation,
                params.screenshot_key,
                params.transaction_id,
                event.fee,
                Utc::now(),
            )
            .await?;
        let team_id = TeamRepository::new(self.db)
            .find_membership(participation.id)
            .await?
            .map(|m| m.team_id);

        Ok(participation_dto(participation, Some(&event), team_id))
    }

    /// Confirms a submitted payment and queues the confirmation email with invoice.
    ///
    /// # Returns
    /// - `Ok(ParticipationDto)` - Registration in `CONFIRMED`
    /// - `Err(AppError::AuthErr)` - Caller is not an admin
    /// - `Err(AppError::NotFound)` - Registration does not exist
    /// - `Err(AppError::BadRequest)` - No payment is waiting for verification
    pub async fn verify_payment(
        &self,
        principal: &Principal,
        participation_id: i32,
    ) -> Result<ParticipationDto, AppError> {
        principal.require_admin()?;

        let (participation, event) = ParticipationRepository::new(self.db)
            .find_with_event(participation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

        if parse_status(&participation.status) != ParticipationStatus::PaymentSubmitted {
            return Err(AppError::BadRequest(
                "Only submitted payments can be verified".to_string(),
            ));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;

        let participation = ParticipationRepository::new(&txn)
            .set_status(participation, ParticipationStatus::Confirmed, now)
            .await?;
        OutboxRepository::new(&txn)
            .enqueue(
                &OutboxMessage::RegistrationConfirmation {
                    participation_id: participation.id,
                },
                now,
            )
            .await?;
        let team_id = TeamRepository::new(&txn)
            .find_membership(participation.id)
            .await?
            .map(|m| m.team_id);

        txn.commit().await?;

        Ok(participation_dto(participation, event.as_ref(), team_id))
    }

    /// Cancels a registration in any state other than `CANCELLED`.
    pub async fn cancel(
        &self,
        principal: &Principal,
        participation_id: i32,
    ) -> Result<ParticipationDto, AppError> {
        principal.require_admin()?;

        let repo = ParticipationRepository::new(self.db);
        let (participation, event) = repo
            .find_with_event(participation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

        if parse_status(&participation.status) == ParticipationStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Registration is already cancelled".to_string(),
            ));
        }

        let participation = repo
            .set_status(participation, ParticipationStatus::Cancelled, Utc::now())
            .await?;
        let team_id = TeamRepository::new(self.db)
            .find_membership(participation.id)
            .await?
            .map(|m| m.team_id);

        Ok(participation_dto(participation, event.as_ref(), team_id))
    }

    /// The caller's registrations, newest first, with their team if any.
    pub async fn list_mine(&self, principal: &Principal) -> Result<Vec<ParticipationDto>, AppError> {
        let rows = ParticipationRepository::new(self.db)
            .get_by_user(principal.user_id)
            .await?;
        let teams = TeamRepository::new(self.db)
            .team_ids_for_participations(rows.iter().map(|(p, _)| p.id).collect())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(participation, event)| {
                let team_id = teams.get(&participation.id).copied();
                participation_dto(participation, event.as_ref(), team_id)
            })
            .collect())
    }

    /// Filtered page of registrations for the admin dashboard.
    ///
    /// # Arguments
    /// - `filter` - Optional event and status filter
    /// - `page` - One-based page number
    /// - `per_page` - Rows per page
    pub async fn list_for_admin(
        &self,
        principal: &Principal,
        filter: ParticipationFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PageDto<ParticipationDto>, AppError> {
        principal.require_admin()?;

        let page = page.max(1);
        let (rows, total) = ParticipationRepository::new(self.db)
            .get_paginated(&filter, page - 1, per_page)
            .await?;
        let teams = TeamRepository::new(self.db)
            .team_ids_for_participations(rows.iter().map(|(p, _)| p.id).collect())
            .await?;

        let items = rows
            .into_iter()
            .map(|(participation, event)| {
                let team_id = teams.get(&participation.id).copied();
                participation_dto(participation, event.as_ref(), team_id)
            })
            .collect();

        Ok(PageDto {
            items,
            total,
            page,
            per_page,
        })
    }
}
