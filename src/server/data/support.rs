//! Support ticket data repository.
//!
//! Tickets, responses and both attachment tables. Callers that need atomicity run
//! these methods on a transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    model::support::{TicketCategory, TicketPriority, TicketStatus},
    server::model::support::{AttachmentInput, TicketFilter},
};

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub ticket_number: String,
    pub user_id: i32,
    pub subject: String,
    pub message: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
}

/// Columns to change on a ticket; `None` leaves a column as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketChanges {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Who may view a stored attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentOwner {
    pub ticket_owner_id: i32,
    pub file_name: String,
    pub internal: bool,
}

pub struct SupportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn ticket_number_exists(&self, ticket_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SupportTicket::find()
            .filter(entity::support_ticket::Column::TicketNumber.eq(ticket_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts an `OPEN` ticket.
    pub async fn create_ticket(
        &self,
        new: NewTicket,
    ) -> Result<entity::support_ticket::Model, DbErr> {
        let now = Utc::now();
        entity::support_ticket::ActiveModel {
            ticket_number: ActiveValue::Set(new.ticket_number),
            user_id: ActiveValue::Set(new.user_id),
            subject: ActiveValue::Set(new.subject),
            message: ActiveValue::Set(new.message),
            category: ActiveValue::Set(new.category.as_str().to_string()),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            priority: ActiveValue::Set(new.priority.as_str().to_string()),
            resolved_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn add_ticket_attachments(
        &self,
        ticket_id: i32,
        attachments: &[AttachmentInput],
    ) -> Result<(), DbErr> {
        if attachments.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = attachments
            .iter()
            .map(|a| entity::support_attachment::ActiveModel {
                ticket_id: ActiveValue::Set(ticket_id),
                storage_key: ActiveValue::Set(a.key.clone()),
                file_name: ActiveValue::Set(a.file_name.clone()),
                content_type: ActiveValue::Set(a.content_type.clone()),
                size: ActiveValue::Set(a.size),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });
        entity::prelude::SupportAttachment::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_number(
        &self,
        ticket_number: &str,
    ) -> Result<Option<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find()
            .filter(entity::support_ticket::Column::TicketNumber.eq(ticket_number))
            .one(self.db)
            .await
    }

    /// The user's tickets, most recently updated first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find()
            .filter(entity::support_ticket::Column::UserId.eq(user_id))
            .order_by_desc(entity::support_ticket::Column::UpdatedAt)
            .order_by_desc(entity::support_ticket::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets tickets matching the filter with pagination, most recently updated first.
    ///
    /// # Returns
    /// - `Ok((tickets, total))` - Tickets for the zero-indexed page and total matches
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &TicketFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::support_ticket::Model>, u64), DbErr> {
        let mut query = entity::prelude::SupportTicket::find();
        if let Some(status) = filter.status {
            query = query.filter(entity::support_ticket::Column::Status.eq(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(entity::support_ticket::Column::Priority.eq(priority.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::support_ticket::Column::UpdatedAt)
            .order_by_desc(entity::support_ticket::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tickets = paginator.fetch_page(page).await?;

        Ok((tickets, total))
    }

    /// Counts responses visible to ticket owners, keyed by ticket id.
    pub async fn public_response_counts(
        &self,
        ticket_ids: Vec<i32>,
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if ticket_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let responses = entity::prelude::SupportResponse::find()
            .filter(entity::support_response::Column::TicketId.is_in(ticket_ids))
            .filter(entity::support_response::Column::IsInternal.eq(false))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for response in responses {
            *counts.entry(response.ticket_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    pub async fn get_ticket_attachments(
        &self,
        ticket_id: i32,
    ) -> Result<Vec<entity::support_attachment::Model>, DbErr> {
        entity::prelude::SupportAttachment::find()
            .filter(entity::support_attachment::Column::TicketId.eq(ticket_id))
            .order_by_asc(entity::support_attachment::Column::Id)
            .all(self.db)
            .await
    }

    /// Responses in posting order, internal notes only when `include_internal`.
    pub async fn get_responses(
        &self,
        ticket_id: i32,
        include_internal: bool,
    ) -> Result<Vec<entity::support_response::Model>, DbErr> {
        let mut query = entity::prelude::SupportResponse::find()
            .filter(entity::support_response::Column::TicketId.eq(ticket_id));
        if !include_internal {
            query = query.filter(entity::support_response::Column::IsInternal.eq(false));
        }

        query
            .order_by_asc(entity::support_response::Column::CreatedAt)
            .order_by_asc(entity::support_response::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_response_attachments(
        &self,
        response_ids: Vec<i32>,
    ) -> Result<Vec<entity::support_response_attachment::Model>, DbErr> {
        if response_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::SupportResponseAttachment::find()
            .filter(entity::support_response_attachment::Column::ResponseId.is_in(response_ids))
            .order_by_asc(entity::support_response_attachment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_response(
        &self,
        id: i32,
    ) -> Result<Option<entity::support_response::Model>, DbErr> {
        entity::prelude::SupportResponse::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create_response(
        &self,
        ticket_id: i32,
        author_id: i32,
        message: String,
        is_internal: bool,
    ) -> Result<entity::support_response::Model, DbErr> {
        entity::support_response::ActiveModel {
            ticket_id: ActiveValue::Set(ticket_id),
            author_id: ActiveValue::Set(author_id),
            message: ActiveValue::Set(message),
            is_internal: ActiveValue::Set(is_internal),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn add_response_attachments(
        &self,
        response_id: i32,
        attachments: &[AttachmentInput],
    ) -> Result<(), DbErr> {
        if attachments.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = attachments
            .iter()
            .map(|a| entity::support_response_attachment::ActiveModel {
                response_id: ActiveValue::Set(response_id),
                storage_key: ActiveValue::Set(a.key.clone()),
                file_name: ActiveValue::Set(a.file_name.clone()),
                content_type: ActiveValue::Set(a.content_type.clone()),
                size: ActiveValue::Set(a.size),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });
        entity::prelude::SupportResponseAttachment::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies the changes and bumps `updated_at`.
    pub async fn update_ticket(
        &self,
        ticket: entity::support_ticket::Model,
        changes: TicketChanges,
        now: DateTime<Utc>,
    ) -> Result<entity::support_ticket::Model, DbErr> {
        let mut active = ticket.into_active_model();
        if let Some(status) = changes.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(priority) = changes.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(resolved_at) = changes.resolved_at {
            active.resolved_at = ActiveValue::Set(Some(resolved_at));
        }
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await
    }

    /// Resolves a storage key to the ticket it is attached to.
    ///
    /// Checks ticket attachments first, then response attachments. A response
    /// attachment on an internal note is flagged `internal`.
    pub async fn find_attachment_owner(&self, key: &str) -> Result<Option<AttachmentOwner>, DbErr> {
        if let Some((attachment, Some(ticket))) = entity::prelude::SupportAttachment::find()
            .filter(entity::support_attachment::Column::StorageKey.eq(key))
            .find_also_related(entity::prelude::SupportTicket)
            .one(self.db)
            .await?
        {
            return Ok(Some(AttachmentOwner {
                ticket_owner_id: ticket.user_id,
                file_name: attachment.file_name,
                internal: false,
            }));
        }

        let Some((attachment, Some(response))) =
            entity::prelude::SupportResponseAttachment::find()
                .filter(entity::support_response_attachment::Column::StorageKey.eq(key))
                .find_also_related(entity::prelude::SupportResponse)
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let Some(ticket) = self.find_by_id(response.ticket_id).await? else {
            return Ok(None);
        };

        Ok(Some(AttachmentOwner {
            ticket_owner_id: ticket.user_id,
            file_name: attachment.file_name,
            internal: response.is_internal,
        }))
    }
}
