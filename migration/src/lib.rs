pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_event_table;
mod m20261001_000003_create_participation_table;
mod m20261001_000004_create_team_tables;
mod m20261002_000005_create_support_tables;
mod m20261003_000006_create_accommodation_tables;
mod m20261004_000007_create_announcement_table;
mod m20261005_000008_create_outbox_job_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_event_table::Migration),
            Box::new(m20261001_000003_create_participation_table::Migration),
            Box::new(m20261001_000004_create_team_tables::Migration),
            Box::new(m20261002_000005_create_support_tables::Migration),
            Box::new(m20261003_000006_create_accommodation_tables::Migration),
            Box::new(m20261004_000007_create_announcement_table::Migration),
            Box::new(m20261005_000008_create_outbox_job_table::Migration),
        ]
    }
}
