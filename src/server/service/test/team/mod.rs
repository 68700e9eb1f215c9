use super::principal;
use crate::{
    model::team::JoinRequestStatus,
    server::{error::AppError, service::team::TeamService},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_team;
mod leave_team;
mod respond_to_request;

/// Upper bound applied on top of each event's own maximum.
const MAX_TEAM_SIZE: i32 = 4;
