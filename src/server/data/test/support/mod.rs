use crate::server::data::support::SupportRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_attachment_owner;
mod get_responses;
