//! Techfest Test Utils
//!
//! Shared testing utilities for the techfest portal. Tests build an in-memory SQLite
//! database from the entity definitions, optionally with a session backed by the same
//! database, and seed it through the factories.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder selecting which tables and indexes to create
//! - **TestContext**: the resulting database connection and lazily created session
//! - **factory**: builders with sensible defaults for every entity
//! - **TestError**: errors that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn registers_for_event() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_participation_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let event = factory::create_event(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
