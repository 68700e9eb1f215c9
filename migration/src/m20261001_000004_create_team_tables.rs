use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User, m20261001_000002_create_event_table::Event,
    m20261001_000003_create_participation_table::Participation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::EventId))
                    .col(string(Team::Name))
                    .col(integer(Team::LeaderParticipationId))
                    .col(
                        timestamp_with_time_zone(Team::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_event_id")
                            .from(Team::Table, Team::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_leader_participation_id")
                            .from(Team::Table, Team::LeaderParticipationId)
                            .to(Participation::Table, Participation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_event_name")
                    .table(Team::Table)
                    .col(Team::EventId)
                    .col(Team::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(integer(TeamMember::TeamId))
                    .col(integer_uniq(TeamMember::ParticipationId))
                    .col(integer(TeamMember::UserId))
                    .col(string(TeamMember::Name))
                    .col(string(TeamMember::Email))
                    .col(string(TeamMember::Phone))
                    .col(string(TeamMember::College))
                    .col(
                        timestamp_with_time_zone(TeamMember::JoinedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_member_team_id")
                            .from(TeamMember::Table, TeamMember::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_member_participation_id")
                            .from(TeamMember::Table, TeamMember::ParticipationId)
                            .to(Participation::Table, Participation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeamJoinRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamJoinRequest::Id))
                    .col(integer(TeamJoinRequest::TeamId))
                    .col(integer(TeamJoinRequest::ParticipationId))
                    .col(integer(TeamJoinRequest::UserId))
                    .col(string(TeamJoinRequest::Name))
                    .col(string(TeamJoinRequest::Email))
                    .col(string(TeamJoinRequest::Phone))
                    .col(string(TeamJoinRequest::College))
                    .col(text_null(TeamJoinRequest::Message))
                    .col(string(TeamJoinRequest::Status))
                    .col(
                        timestamp_with_time_zone(TeamJoinRequest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(TeamJoinRequest::RespondedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_join_request_team_id")
                            .from(TeamJoinRequest::Table, TeamJoinRequest::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_join_request_participation_id")
                            .from(TeamJoinRequest::Table, TeamJoinRequest::ParticipationId)
                            .to(Participation::Table, Participation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_join_request_user_id")
                            .from(TeamJoinRequest::Table, TeamJoinRequest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamJoinRequest::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    EventId,
    Name,
    LeaderParticipationId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    Id,
    TeamId,
    ParticipationId,
    UserId,
    Name,
    Email,
    Phone,
    College,
    JoinedAt,
}

#[derive(DeriveIden)]
pub enum TeamJoinRequest {
    Table,
    Id,
    TeamId,
    ParticipationId,
    UserId,
    Name,
    Email,
    Phone,
    College,
    Message,
    Status,
    CreatedAt,
    RespondedAt,
}
