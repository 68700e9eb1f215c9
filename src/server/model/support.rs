use crate::{
    model::{
        api::FieldErrorDto,
        attachment::{UploadPurpose, MAX_ATTACHMENTS},
        support::{
            validate_response_text, validate_ticket_text, AttachmentDto, AttachmentInputDto,
            CreateResponseDto, CreateTicketDto, ResponseDto, TicketCategory, TicketPriority,
            TicketStatus, TicketSummaryDto,
        },
    },
    server::{error::validation::ValidationError, service::storage::key_belongs_to},
};

/// An uploaded object checked against the support attachment policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentInput {
    pub key: String,
    pub file_name: String,
    pub content_type: String,
    pub size: i64,
}

fn check_attachments(
    errors: &mut Vec<FieldErrorDto>,
    attachments: Vec<AttachmentInputDto>,
    uploader_id: i32,
) -> Vec<AttachmentInput> {
    if attachments.len() > MAX_ATTACHMENTS {
        errors.push(FieldErrorDto::new(
            "attachments",
            format!("At most {} attachments are allowed", MAX_ATTACHMENTS),
        ));
        return Vec::new();
    }

    let mut checked = Vec::with_capacity(attachments.len());
    for (index, attachment) in attachments.into_iter().enumerate() {
        let field = format!("attachments[{}]", index);
        if let Err(message) = UploadPurpose::Support.check(&attachment.content_type, attachment.size)
        {
            errors.push(FieldErrorDto::new(field, message));
            continue;
        }
        if !key_belongs_to(&attachment.key, "support", uploader_id) {
            errors.push(FieldErrorDto::new(field, "Attachment was not uploaded by you"));
            continue;
        }
        let file_name = attachment.file_name.trim();
        checked.push(AttachmentInput {
            key: attachment.key,
            file_name: if file_name.is_empty() {
                "attachment".to_string()
            } else {
                file_name.to_string()
            },
            content_type: attachment.content_type.to_lowercase(),
            size: attachment.size as i64,
        });
    }
    checked
}

#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub subject: String,
    pub message: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub attachments: Vec<AttachmentInput>,
}

impl CreateTicketParams {
    pub fn from_dto(dto: CreateTicketDto, user_id: i32) -> Result<Self, ValidationError> {
        let mut errors = validate_ticket_text(&dto.subject, &dto.message);
        let attachments = check_attachments(&mut errors, dto.attachments, user_id);
        ValidationError::check(errors)?;

        Ok(Self {
            subject: dto.subject.trim().to_string(),
            message: dto.message.trim().to_string(),
            category: dto.category,
            priority: dto.priority.unwrap_or(TicketPriority::Medium),
            attachments,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateResponseParams {
    pub message: String,
    pub is_internal: bool,
    pub attachments: Vec<AttachmentInput>,
}

impl CreateResponseParams {
    pub fn from_dto(dto: CreateResponseDto, author_id: i32) -> Result<Self, ValidationError> {
        let mut errors = validate_response_text(&dto.message, dto.attachments.len());
        let attachments = if dto.attachments.len() > MAX_ATTACHMENTS {
            Vec::new()
        } else {
            check_attachments(&mut errors, dto.attachments, author_id)
        };
        ValidationError::check(errors)?;

        Ok(Self {
            message: dto.message.trim().to_string(),
            is_internal: dto.is_internal,
            attachments,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

pub fn parse_category(value: &str) -> TicketCategory {
    TicketCategory::parse(value).unwrap_or(TicketCategory::Other)
}

pub fn parse_ticket_status(value: &str) -> TicketStatus {
    TicketStatus::parse(value).unwrap_or(TicketStatus::Open)
}

pub fn parse_priority(value: &str) -> TicketPriority {
    TicketPriority::parse(value).unwrap_or(TicketPriority::Medium)
}

pub fn ticket_summary_dto(ticket: &entity::support_ticket::Model, response_count: u64) -> TicketSummaryDto {
    TicketSummaryDto {
        id: ticket.id,
        ticket_number: ticket.ticket_number.clone(),
        user_id: ticket.user_id,
        subject: ticket.subject.clone(),
        category: parse_category(&ticket.category),
        status: parse_ticket_status(&ticket.status),
        priority: parse_priority(&ticket.priority),
        response_count,
        resolved_at: ticket.resolved_at,
        created_at: ticket.created_at,
        updated_at: ticket.updated_at,
    }
}

pub fn ticket_attachment_dto(attachment: entity::support_attachment::Model) -> AttachmentDto {
    AttachmentDto {
        id: attachment.id,
        key: attachment.storage_key,
        file_name: attachment.file_name,
        content_type: attachment.content_type,
        size: attachment.size.max(0) as u64,
    }
}

pub fn response_attachment_dto(
    attachment: entity::support_response_attachment::Model,
) -> AttachmentDto {
    AttachmentDto {
        id: attachment.id,
        key: attachment.storage_key,
        file_name: attachment.file_name,
        content_type: attachment.content_type,
        size: attachment.size.max(0) as u64,
    }
}

/// `author` is `None` when the author's account no longer exists.
pub fn response_dto(
    response: entity::support_response::Model,
    author: Option<&entity::user::Model>,
    attachments: Vec<entity::support_response_attachment::Model>,
) -> ResponseDto {
    ResponseDto {
        id: response.id,
        author_id: response.author_id,
        author_name: author
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        from_staff: author.map(|a| a.admin).unwrap_or(false),
        message: response.message,
        is_internal: response.is_internal,
        attachments: attachments.into_iter().map(response_attachment_dto).collect(),
        created_at: response.created_at,
    }
}
