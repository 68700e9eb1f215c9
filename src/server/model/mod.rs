//! Server-side domain models and parameter types.
//!
//! Parameter types are built from request DTOs at the controller boundary and carry
//! their own validation. Entity models returned by repositories are converted to DTOs
//! here so controllers never touch entity types directly.

pub mod accommodation;
pub mod admin;
pub mod announcement;
pub mod auth;
pub mod event;
pub mod outbox;
pub mod participation;
pub mod support;
pub mod team;
pub mod user;

pub(crate) use crate::model::validation::{check_amount, check_length, check_phone};
