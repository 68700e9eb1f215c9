//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//! Users sign in with Google; sessions live in the same Sqlite database as the
//! application data.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Registration, team, support and accommodation workflows
//! - **Data Layer** (`data/`) - Database operations through repositories
//! - **Model Layer** (`model/`) - Principal, validated params and entity-to-DTO conversion
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, storage, mailer)
//! - **Startup** (`startup`) - Initialization of database, sessions, storage and mail
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Outbox dispatcher that sends queued emails
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** resolves the caller through `AuthGuard` and validates the DTO
//! 3. **Service** checks ownership, runs the workflow and queues side effects in the outbox
//! 4. **Data** reads and writes rows, inside a transaction where the workflow needs one
//! 5. **Controller** wraps the result in the `ActionResult` envelope
//!
//! Emails are never sent from a request. They are written to the outbox in the same
//! transaction as the change that causes them and sent by the scheduler.
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
