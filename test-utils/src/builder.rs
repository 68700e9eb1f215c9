use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from the SeaORM entities, so column types, foreign keys and
/// single-column unique constraints match the entity definitions. Composite unique
/// indexes the application relies on are added by the `with_<area>_tables` helpers.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_support_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order.
    tables: Vec<TableCreateStatement>,
    /// Names of the tables already added.
    names: Vec<&'static str>,
    /// CREATE INDEX statements, executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            names: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables referenced by foreign keys must be added before the tables that
    /// reference them. Adding the same entity twice is a no-op.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let name = entity.table_name();
        if self.names.contains(&name) {
            return self;
        }

        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.names.push(name);
        self
    }

    /// Adds an index to be created once all tables exist.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the user and event tables.
    pub fn with_event_tables(self) -> Self {
        self.with_table(User).with_table(Event)
    }

    /// Adds the tables required for registration and payment operations, including
    /// the unique (user, event) index on participations.
    pub fn with_participation_tables(self) -> Self {
        self.with_event_tables()
            .with_table(Participation)
            .with_table(OutboxJob)
            .with_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_participation_user_event")
                    .table(Participation)
                    .col(entity::participation::Column::UserId)
                    .col(entity::participation::Column::EventId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds the team tables on top of the participation tables, including the
    /// unique (event, name) index on teams.
    pub fn with_team_tables(self) -> Self {
        self.with_participation_tables()
            .with_table(Team)
            .with_table(TeamMember)
            .with_table(TeamJoinRequest)
            .with_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_event_name")
                    .table(Team)
                    .col(entity::team::Column::EventId)
                    .col(entity::team::Column::Name)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds the support ticket, response and attachment tables.
    pub fn with_support_tables(self) -> Self {
        self.with_table(User)
            .with_table(SupportTicket)
            .with_table(SupportResponse)
            .with_table(SupportAttachment)
            .with_table(SupportResponseAttachment)
            .with_table(OutboxJob)
    }

    /// Adds the stay, food and booking tables.
    pub fn with_accommodation_tables(self) -> Self {
        self.with_table(User)
            .with_table(Stay)
            .with_table(Food)
            .with_table(StayBooking)
            .with_table(OutboxJob)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_team_tables()
            .with_support_tables()
            .with_accommodation_tables()
            .with_table(Announcement)
    }

    /// Builds the test context, creating the configured tables and then indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
