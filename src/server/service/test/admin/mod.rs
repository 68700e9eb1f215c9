use super::principal;
use crate::server::{
    error::AppError,
    model::admin::{DataCleanupParams, DataCleanupResult},
    service::admin::AdminService,
};
use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod data_cleanup;
