use super::principal;
use crate::{
    model::support::{TicketCategory, TicketPriority, TicketStatus},
    server::{
        error::AppError,
        model::support::{AttachmentInput, CreateResponseParams, CreateTicketParams},
        service::support::SupportService,
    },
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_response;
mod create_ticket;
mod get_ticket;
mod update_ticket;

fn reply(message: &str, is_internal: bool) -> CreateResponseParams {
    CreateResponseParams {
        message: message.to_string(),
        is_internal,
        attachments: Vec::new(),
    }
}
