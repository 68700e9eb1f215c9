//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand
//! that inserts a row with defaults. Factories take the parent rows they depend on
//! (user, event, team, ...) so foreign keys are always satisfied.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(db)
//!     .email("ada@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! let event = factory::event::EventFactory::new(db).fee(250).build().await?;
//! let participation = factory::create_participation(db, &user, &event).await?;
//! ```

pub mod accommodation;
pub mod announcement;
pub mod event;
pub mod helpers;
pub mod outbox;
pub mod participation;
pub mod support;
pub mod team;
pub mod user;

pub use accommodation::{create_booking, create_food, create_stay};
pub use announcement::create_announcement;
pub use event::{create_event, create_team_event};
pub use outbox::create_outbox_job;
pub use participation::create_participation;
pub use support::{create_response, create_ticket};
pub use team::{create_join_request, create_team, create_team_member};
pub use user::{create_admin, create_user};
