mod accommodation;
mod admin;
mod announcement;
mod participation;
mod support;
mod team;
mod upload;
mod user;

use crate::server::model::auth::Principal;

fn principal(user: &entity::user::Model) -> Principal {
    Principal::from_entity(user)
}
