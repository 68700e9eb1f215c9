use crate::server::{
    data::user::UserRepository,
    model::user::{UpdateProfileParams, UpsertUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update_profile;
mod upsert;
