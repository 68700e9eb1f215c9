use crate::{
    model::participation::ParticipationStatus,
    server::{
        data::{
            is_unique_violation,
            participation::{NewParticipation, ParticipationRepository},
        },
        model::participation::{ParticipationFilter, RegistrantSnapshot},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod sync_snapshot;

fn new_participation(user: &entity::user::Model, event: &entity::event::Model) -> NewParticipation {
    NewParticipation {
        user_id: user.id,
        event_id: event.id,
        snapshot: RegistrantSnapshot {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: "9876543210".to_string(),
            college: "Test College".to_string(),
        },
        status: ParticipationStatus::Registered,
        payment_amount: None,
        payment_screenshot_key: None,
        transaction_id: None,
        payment_submitted_at: None,
        payment_verified_at: None,
    }
}
