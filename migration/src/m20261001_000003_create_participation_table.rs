use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000001_create_user_table::User, m20261001_000002_create_event_table::Event};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participation::Table)
                    .if_not_exists()
                    .col(pk_auto(Participation::Id))
                    .col(integer(Participation::UserId))
                    .col(integer(Participation::EventId))
                    .col(string(Participation::Name))
                    .col(string(Participation::Email))
                    .col(string(Participation::Phone))
                    .col(string(Participation::College))
                    .col(string(Participation::Status))
                    .col(integer_null(Participation::PaymentAmount))
                    .col(string_null(Participation::PaymentScreenshotKey))
                    .col(string_null(Participation::TransactionId))
                    .col(timestamp_with_time_zone_null(
                        Participation::PaymentSubmittedAt,
                    ))
                    .col(timestamp_with_time_zone_null(
                        Participation::PaymentVerifiedAt,
                    ))
                    .col(
                        timestamp_with_time_zone(Participation::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Participation::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_user_id")
                            .from(Participation::Table, Participation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_event_id")
                            .from(Participation::Table, Participation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per (user, event); the insert conflict is authoritative.
        manager
            .create_index(
                Index::create()
                    .name("idx_participation_user_event")
                    .table(Participation::Table)
                    .col(Participation::UserId)
                    .col(Participation::EventId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Participation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Participation {
    Table,
    Id,
    UserId,
    EventId,
    Name,
    Email,
    Phone,
    College,
    Status,
    PaymentAmount,
    PaymentScreenshotKey,
    TransactionId,
    PaymentSubmittedAt,
    PaymentVerifiedAt,
    CreatedAt,
    UpdatedAt,
}
