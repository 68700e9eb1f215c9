use super::principal;
use crate::server::{
    error::{auth::AuthError, AppError},
    model::{auth::GoogleUserInfo, user::UpdateProfileParams},
    service::user::UserService,
};
use entity::prelude::*;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod sign_in;
mod update_profile;

fn google_user(email: &str, name: Option<&str>) -> GoogleUserInfo {
    GoogleUserInfo {
        sub: "1234567890".to_string(),
        email: email.to_string(),
        email_verified: true,
        name: name.map(str::to_string),
        picture: None,
    }
}
