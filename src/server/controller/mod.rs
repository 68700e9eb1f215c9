//! HTTP handlers.
//!
//! Controllers resolve the caller through `AuthGuard`, turn request DTOs into
//! validated params and hand them to a service. Every JSON response uses the
//! `ActionResult` envelope; failures are rendered by `AppError`.

pub mod accommodation;
pub mod admin;
pub mod announcement;
pub mod auth;
pub mod event;
pub mod participation;
pub mod support;
pub mod team;
pub mod upload;
pub mod user;

/// Default page size for admin listings.
pub(crate) fn default_entries() -> u64 {
    20
}
