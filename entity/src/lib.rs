//! SeaORM entity models for the techfest portal.
//!
//! One module per table. Enumerated columns (statuses, priorities, categories)
//! are stored as upper-case strings and parsed by the application layer.

pub mod prelude;

pub mod announcement;
pub mod event;
pub mod food;
pub mod outbox_job;
pub mod participation;
pub mod stay;
pub mod stay_booking;
pub mod support_attachment;
pub mod support_response;
pub mod support_response_attachment;
pub mod support_ticket;
pub mod team;
pub mod team_join_request;
pub mod team_member;
pub mod user;
