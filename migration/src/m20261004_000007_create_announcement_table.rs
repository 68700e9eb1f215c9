use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcement::Id))
                    .col(string(Announcement::Title))
                    .col(text(Announcement::Body))
                    .col(string_null(Announcement::AttachmentKey))
                    .col(string_null(Announcement::AttachmentName))
                    .col(
                        timestamp_with_time_zone(Announcement::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcement {
    Table,
    Id,
    Title,
    Body,
    AttachmentKey,
    AttachmentName,
    CreatedAt,
}
