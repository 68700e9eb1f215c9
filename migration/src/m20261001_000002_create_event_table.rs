use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string_uniq(Event::Slug))
                    .col(string(Event::Name))
                    .col(text(Event::Description))
                    .col(string_null(Event::Venue))
                    .col(integer(Event::Fee).default(0))
                    .col(boolean(Event::TeamEvent).default(false))
                    .col(integer(Event::MinTeamSize).default(1))
                    .col(integer(Event::MaxTeamSize).default(1))
                    .col(boolean(Event::RegistrationOpen).default(true))
                    .col(timestamp_with_time_zone(Event::StartsAt))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Slug,
    Name,
    Description,
    Venue,
    Fee,
    TeamEvent,
    MinTeamSize,
    MaxTeamSize,
    RegistrationOpen,
    StartsAt,
    CreatedAt,
}
