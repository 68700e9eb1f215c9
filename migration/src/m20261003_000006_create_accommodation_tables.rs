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
                    .table(Stay::Table)
                    .if_not_exists()
                    .col(pk_auto(Stay::Id))
                    .col(string(Stay::Place))
                    .col(text_null(Stay::Description))
                    .col(integer(Stay::Price))
                    .col(
                        timestamp_with_time_zone(Stay::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Food::Table)
                    .if_not_exists()
                    .col(pk_auto(Food::Id))
                    .col(string(Food::Weekday))
                    .col(string(Food::MealType))
                    .col(string(Food::Items))
                    .col(integer(Food::Price))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StayBooking::Table)
                    .if_not_exists()
                    .col(pk_auto(StayBooking::Id))
                    .col(integer(StayBooking::UserId))
                    .col(integer(StayBooking::StayId))
                    .col(string(StayBooking::Name))
                    .col(string(StayBooking::Email))
                    .col(string(StayBooking::Phone))
                    .col(date(StayBooking::CheckIn))
                    .col(date(StayBooking::CheckOut))
                    .col(integer(StayBooking::Guests))
                    .col(integer(StayBooking::Amount))
                    .col(string(StayBooking::Status))
                    .col(string_null(StayBooking::PaymentScreenshotKey))
                    .col(string_null(StayBooking::TransactionId))
                    .col(timestamp_with_time_zone_null(StayBooking::PaymentSubmittedAt))
                    .col(timestamp_with_time_zone_null(StayBooking::PaymentVerifiedAt))
                    .col(
                        timestamp_with_time_zone(StayBooking::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stay_booking_user_id")
                            .from(StayBooking::Table, StayBooking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stay_booking_stay_id")
                            .from(StayBooking::Table, StayBooking::StayId)
                            .to(Stay::Table, Stay::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StayBooking::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Food::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stay::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stay {
    Table,
    Id,
    Place,
    Description,
    Price,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Food {
    Table,
    Id,
    Weekday,
    MealType,
    Items,
    Price,
}

#[derive(DeriveIden)]
pub enum StayBooking {
    Table,
    Id,
    UserId,
    StayId,
    Name,
    Email,
    Phone,
    CheckIn,
    CheckOut,
    Guests,
    Amount,
    Status,
    PaymentScreenshotKey,
    TransactionId,
    PaymentSubmittedAt,
    PaymentVerifiedAt,
    CreatedAt,
}
