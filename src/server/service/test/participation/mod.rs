use super::principal;
use crate::{
    model::participation::ParticipationStatus,
    server::{
        error::AppError,
        model::participation::{
            CheckoutParams, RegistrantSnapshot, RegistrationParams, ReuploadPaymentParams,
        },
        service::participation::ParticipationService,
    },
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod checkout;
mod register;
mod reupload_payment;
mod verify_payment;

fn snapshot(user: &entity::user::Model) -> RegistrantSnapshot {
    RegistrantSnapshot {
        name: user.name.clone(),
        email: user.email.clone(),
        phone: "9876543210".to_string(),
        college: "Test College".to_string(),
    }
}

fn registration(user: &entity::user::Model) -> RegistrationParams {
    RegistrationParams {
        snapshot: snapshot(user),
    }
}
