//! Support ticket, response and attachment factories.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating support tickets.
///
/// Defaults to an `OPEN`, `MEDIUM` priority `GENERAL` ticket.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    ticket_number: String,
    subject: String,
    category: String,
    status: String,
    priority: String,
    resolved_at: Option<DateTime<Utc>>,
}

impl<'a> TicketFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            ticket_number: format!("INSP-TEST{:04}-ABCD", id),
            subject: format!("Ticket subject {}", id),
            category: "GENERAL".to_string(),
            status: "OPEN".to_string(),
            priority: "MEDIUM".to_string(),
            resolved_at: None,
        }
    }

    pub fn ticket_number(mut self, number: impl Into<String>) -> Self {
        self.ticket_number = number.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn resolved_at(mut self, resolved_at: Option<DateTime<Utc>>) -> Self {
        self.resolved_at = resolved_at;
        self
    }

    pub async fn build(self) -> Result<entity::support_ticket::Model, DbErr> {
        let now = Utc::now();
        entity::support_ticket::ActiveModel {
            ticket_number: ActiveValue::Set(self.ticket_number),
            user_id: ActiveValue::Set(self.user_id),
            subject: ActiveValue::Set(self.subject),
            message: ActiveValue::Set("Something is not working as expected".to_string()),
            category: ActiveValue::Set(self.category),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            resolved_at: ActiveValue::Set(self.resolved_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket for the user.
pub async fn create_ticket(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::support_ticket::Model, DbErr> {
    TicketFactory::new(db, user_id).build().await
}

/// Creates a response on the ticket.
pub async fn create_response(
    db: &DatabaseConnection,
    ticket_id: i32,
    author_id: i32,
    is_internal: bool,
) -> Result<entity::support_response::Model, DbErr> {
    entity::support_response::ActiveModel {
        ticket_id: ActiveValue::Set(ticket_id),
        author_id: ActiveValue::Set(author_id),
        message: ActiveValue::Set("Thanks, we are looking into it".to_string()),
        is_internal: ActiveValue::Set(is_internal),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an attachment row on the ticket pointing at `storage_key`.
pub async fn create_attachment(
    db: &DatabaseConnection,
    ticket_id: i32,
    storage_key: &str,
) -> Result<entity::support_attachment::Model, DbErr> {
    let file_name = storage_key.rsplit('/').next().unwrap_or(storage_key);
    entity::support_attachment::ActiveModel {
        ticket_id: ActiveValue::Set(ticket_id),
        storage_key: ActiveValue::Set(storage_key.to_string()),
        file_name: ActiveValue::Set(file_name.to_string()),
        content_type: ActiveValue::Set("image/png".to_string()),
        size: ActiveValue::Set(1024),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an attachment row on the response pointing at `storage_key`.
pub async fn create_response_attachment(
    db: &DatabaseConnection,
    response_id: i32,
    storage_key: &str,
) -> Result<entity::support_response_attachment::Model, DbErr> {
    let file_name = storage_key.rsplit('/').next().unwrap_or(storage_key);
    entity::support_response_attachment::ActiveModel {
        response_id: ActiveValue::Set(response_id),
        storage_key: ActiveValue::Set(storage_key.to_string()),
        file_name: ActiveValue::Set(file_name.to_string()),
        content_type: ActiveValue::Set("application/pdf".to_string()),
        size: ActiveValue::Set(2048),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
