//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Authorization**: Checking the caller's `Principal` against the resource
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Transaction Management**: Writing a change and its outbox job atomically
//!
//! `storage`, `email` and `document` wrap external concerns (object storage, SMTP and
//! PDF rendering) behind small interfaces the other services and the outbox
//! dispatcher use.

pub mod accommodation;
pub mod admin;
pub mod announcement;
pub mod auth;
pub mod document;
pub mod email;
pub mod event;
pub mod outbox;
pub mod participation;
pub mod storage;
pub mod support;
pub mod team;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
