//! DTOs and rules shared by the client and the server.

pub mod accommodation;
pub mod admin;
pub mod announcement;
pub mod api;
pub mod attachment;
pub mod event;
pub mod participation;
pub mod support;
pub mod team;
pub mod upload;
pub mod user;
pub mod validation;
