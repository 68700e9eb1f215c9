//! Team, member and join request factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a team for the event led by the given participation.
///
/// The leader is not inserted as a member; use `create_team_member` for that.
pub async fn create_team(
    db: &DatabaseConnection,
    event: &entity::event::Model,
    leader: &entity::participation::Model,
) -> Result<entity::team::Model, DbErr> {
    entity::team::ActiveModel {
        event_id: ActiveValue::Set(event.id),
        name: ActiveValue::Set(format!("Team {}", next_id())),
        leader_participation_id: ActiveValue::Set(leader.id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds the participation to the team, copying its registrant snapshot.
pub async fn create_team_member(
    db: &DatabaseConnection,
    team: &entity::team::Model,
    participation: &entity::participation::Model,
) -> Result<entity::team_member::Model, DbErr> {
    entity::team_member::ActiveModel {
        team_id: ActiveValue::Set(team.id),
        participation_id: ActiveValue::Set(participation.id),
        user_id: ActiveValue::Set(participation.user_id),
        name: ActiveValue::Set(participation.name.clone()),
        email: ActiveValue::Set(participation.email.clone()),
        phone: ActiveValue::Set(participation.phone.clone()),
        college: ActiveValue::Set(participation.college.clone()),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a join request with the given status (`PENDING`, `APPROVED`, `REJECTED`).
pub async fn create_join_request(
    db: &DatabaseConnection,
    team: &entity::team::Model,
    participation: &entity::participation::Model,
    status: &str,
) -> Result<entity::team_join_request::Model, DbErr> {
    entity::team_join_request::ActiveModel {
        team_id: ActiveValue::Set(team.id),
        participation_id: ActiveValue::Set(participation.id),
        user_id: ActiveValue::Set(participation.user_id),
        name: ActiveValue::Set(participation.name.clone()),
        email: ActiveValue::Set(participation.email.clone()),
        phone: ActiveValue::Set(participation.phone.clone()),
        college: ActiveValue::Set(participation.college.clone()),
        message: ActiveValue::Set(Some("Let me in".to_string())),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        responded_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
