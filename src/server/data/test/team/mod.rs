use crate::{model::team::JoinRequestStatus, server::data::team::TeamRepository};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod detach_participations;
mod sync_snapshot;
