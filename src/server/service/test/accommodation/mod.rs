use super::principal;
use crate::{
    model::{accommodation::MealType, participation::ParticipationStatus},
    server::{
        error::AppError,
        model::accommodation::BookStayParams,
        service::accommodation::AccommodationService,
    },
};
use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod book_stay;
mod delete_stay;
mod list_food;
mod verify_booking;
