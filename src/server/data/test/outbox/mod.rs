use crate::server::{
    data::outbox::OutboxRepository,
    model::outbox::{OutboxMessage, MAX_ATTEMPTS},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_done_before;
mod enqueue;
