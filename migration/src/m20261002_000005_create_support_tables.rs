use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTicket::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportTicket::Id))
                    .col(string_uniq(SupportTicket::TicketNumber))
                    .col(integer(SupportTicket::UserId))
                    .col(string(SupportTicket::Subject))
                    .col(text(SupportTicket::Message))
                    .col(string(SupportTicket::Category))
                    .col(string(SupportTicket::Status))
                    .col(string(SupportTicket::Priority))
                    .col(timestamp_with_time_zone_null(SupportTicket::ResolvedAt))
                    .col(
                        timestamp_with_time_zone(SupportTicket::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SupportTicket::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_ticket_user_id")
                            .from(SupportTicket::Table, SupportTicket::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportResponse::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportResponse::Id))
                    .col(integer(SupportResponse::TicketId))
                    .col(integer(SupportResponse::AuthorId))
                    .col(text(SupportResponse::Message))
                    .col(boolean(SupportResponse::IsInternal).default(false))
                    .col(
                        timestamp_with_time_zone(SupportResponse::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_response_ticket_id")
                            .from(SupportResponse::Table, SupportResponse::TicketId)
                            .to(SupportTicket::Table, SupportTicket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_response_author_id")
                            .from(SupportResponse::Table, SupportResponse::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportAttachment::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportAttachment::Id))
                    .col(integer(SupportAttachment::TicketId))
                    .col(string(SupportAttachment::StorageKey))
                    .col(string(SupportAttachment::FileName))
                    .col(string(SupportAttachment::ContentType))
                    .col(big_integer(SupportAttachment::Size))
                    .col(
                        timestamp_with_time_zone(SupportAttachment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_attachment_ticket_id")
                            .from(SupportAttachment::Table, SupportAttachment::TicketId)
                            .to(SupportTicket::Table, SupportTicket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportResponseAttachment::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportResponseAttachment::Id))
                    .col(integer(SupportResponseAttachment::ResponseId))
                    .col(string(SupportResponseAttachment::StorageKey))
                    .col(string(SupportResponseAttachment::FileName))
                    .col(string(SupportResponseAttachment::ContentType))
                    .col(big_integer(SupportResponseAttachment::Size))
                    .col(
                        timestamp_with_time_zone(SupportResponseAttachment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_response_attachment_response_id")
                            .from(
                                SupportResponseAttachment::Table,
                                SupportResponseAttachment::ResponseId,
                            )
                            .to(SupportResponse::Table, SupportResponse::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(SupportResponseAttachment::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(SupportAttachment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupportResponse::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupportTicket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SupportTicket {
    Table,
    Id,
    TicketNumber,
    UserId,
    Subject,
    Message,
    Category,
    Status,
    Priority,
    ResolvedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum SupportResponse {
    Table,
    Id,
    TicketId,
    AuthorId,
    Message,
    IsInternal,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum SupportAttachment {
    Table,
    Id,
    TicketId,
    StorageKey,
    FileName,
    ContentType,
    Size,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum SupportResponseAttachment {
    Table,
    Id,
    ResponseId,
    StorageKey,
    FileName,
    ContentType,
    Size,
    CreatedAt,
}
