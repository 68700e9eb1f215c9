use super::principal;
use crate::server::{
    error::AppError,
    service::{announcement::AnnouncementService, storage::memory::MemoryStorage},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list;
