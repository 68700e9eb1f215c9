pub mod accommodation;
pub mod admin;
pub mod announcement;
pub mod event;
pub mod helper;
pub mod participation;
pub mod support;
pub mod team;
pub mod upload;
pub mod user;
