use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutboxJob::Table)
                    .if_not_exists()
                    .col(pk_auto(OutboxJob::Id))
                    .col(string(OutboxJob::Kind))
                    .col(text(OutboxJob::Payload))
                    .col(string(OutboxJob::Status))
                    .col(integer(OutboxJob::Attempts).default(0))
                    .col(integer(OutboxJob::MaxAttempts).default(5))
                    .col(timestamp_with_time_zone(OutboxJob::NextAttemptAt))
                    .col(text_null(OutboxJob::LastError))
                    .col(
                        timestamp_with_time_zone(OutboxJob::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(OutboxJob::CompletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_outbox_job_status_next_attempt")
                    .table(OutboxJob::Table)
                    .col(OutboxJob::Status)
                    .col(OutboxJob::NextAttemptAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutboxJob::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OutboxJob {
    Table,
    Id,
    Kind,
    Payload,
    Status,
    Attempts,
    MaxAttempts,
    NextAttemptAt,
    LastError,
    CreatedAt,
    CompletedAt,
}
