use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::team::JoinRequestStatus;

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the team and inserts the leader as its first member.
    pub async fn create(
        &self,
        name: String,
        leader: &entity::participation::Model,
    ) -> Result<entity::team::Model, DbErr> {
        let team = entity::team::ActiveModel {
            event_id: ActiveValue::Set(leader.event_id),
            name: ActiveValue::Set(name),
            leader_participation_id: ActiveValue::Set(leader.id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.add_member(team.id, leader).await?;

        Ok(team)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }

    /// Copies the participation's snapshot into a new member row.
    pub async fn add_member(
        &self,
        team_id: i32,
        participation: &entity::participation::Model,
    ) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            participation_id: ActiveValue::Set(participation.id),
            user_id: ActiveValue::Set(participation.user_id),
            name: ActiveValue::Set(participation.name.clone()),
            email: ActiveValue::Set(participation.email.clone()),
            phone: ActiveValue::Set(participation.phone.clone()),
            college: ActiveValue::Set(participation.college.clone()),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn remove_member(&self, team_id: i32, participation_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::ParticipationId.eq(participation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_membership(
        &self,
        participation_id: i32,
    ) -> Result<Option<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::ParticipationId.eq(participation_id))
            .one(self.db)
            .await
    }

    /// Members in join order.
    pub async fn get_members(&self, team_id: i32) -> Result<Vec<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .order_by_asc(entity::team_member::Column::JoinedAt)
            .order_by_asc(entity::team_member::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_members(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .count(self.db)
            .await
    }

    /// Maps each given participation to the team it belongs to.
    pub async fn team_ids_for_participations(
        &self,
        participation_ids: Vec<i32>,
    ) -> Result<HashMap<i32, i32>, DbErr> {
        if participation_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let members = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::ParticipationId.is_in(participation_ids))
            .all(self.db)
            .await?;

        Ok(members
            .into_iter()
            .map(|m| (m.participation_id, m.team_id))
            .collect())
    }

    pub async fn create_join_request(
        &self,
        team_id: i32,
        participation: &entity::participation::Model,
        message: Option<String>,
    ) -> Result<entity::team_join_request::Model, DbErr> {
        entity::team_join_request::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            participation_id: ActiveValue::Set(participation.id),
            user_id: ActiveValue::Set(participation.user_id),
            name: ActiveValue::Set(participation.name.clone()),
            email: ActiveValue::Set(participation.email.clone()),
            phone: ActiveValue::Set(participation.phone.clone()),
            college: ActiveValue::Set(participation.college.clone()),
            message: ActiveValue::Set(message),
            status: ActiveValue::Set(JoinRequestStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_join_request(
        &self,
        id: i32,
    ) -> Result<Option<entity::team_join_request::Model>, DbErr> {
        entity::prelude::TeamJoinRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn has_pending_request(
        &self,
        team_id: i32,
        participation_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::TeamJoinRequest::find()
            .filter(entity::team_join_request::Column::TeamId.eq(team_id))
            .filter(entity::team_join_request::Column::ParticipationId.eq(participation_id))
            .filter(
                entity::team_join_request::Column::Status
                    .eq(JoinRequestStatus::Pending.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Pending requests, oldest first.
    pub async fn get_pending_requests(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::team_join_request::Model>, DbErr> {
        entity::prelude::TeamJoinRequest::find()
            .filter(entity::team_join_request::Column::TeamId.eq(team_id))
            .filter(
                entity::team_join_request::Column::Status
                    .eq(JoinRequestStatus::Pending.as_str()),
            )
            .order_by_asc(entity::team_join_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn set_request_status(
        &self,
        request: entity::team_join_request::Model,
        status: JoinRequestStatus,
        now: DateTime<Utc>,
    ) -> Result<entity::team_join_request::Model, DbErr> {
        let mut active = request.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.responded_at = ActiveValue::Set(Some(now));
        active.update(self.db).await
    }

    /// Rewrites the snapshot on the user's memberships and join requests.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of member and request rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn sync_snapshot(
        &self,
        user_id: i32,
        name: &str,
        phone: Option<&str>,
        college: Option<&str>,
    ) -> Result<u64, DbErr> {
        let mut members = entity::prelude::TeamMember::update_many()
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .col_expr(entity::team_member::Column::Name, Expr::value(name));
        let mut requests = entity::prelude::TeamJoinRequest::update_many()
            .filter(entity::team_join_request::Column::UserId.eq(user_id))
            .col_expr(entity::team_join_request::Column::Name, Expr::value(name));

        if let Some(phone) = phone {
            members = members.col_expr(entity::team_member::Column::Phone, Expr::value(phone));
            requests =
                requests.col_expr(entity::team_join_request::Column::Phone, Expr::value(phone));
        }
        if let Some(college) = college {
            members = members.col_expr(entity::team_member::Column::College, Expr::value(college));
            requests = requests.col_expr(
                entity::team_join_request::Column::College,
                Expr::value(college),
            );
        }

        let members = members.exec(self.db).await?.rows_affected;
        let requests = requests.exec(self.db).await?.rows_affected;

        Ok(members + requests)
    }

    /// Removes every trace of the given participations from teams.
    ///
    /// Teams led by one of them are deleted together with their members and requests.
    pub async fn detach_participations(&self, participation_ids: Vec<i32>) -> Result<(), DbErr> {
        if participation_ids.is_empty() {
            return Ok(());
        }

        let led: Vec<i32> = entity::prelude::Team::find()
            .filter(entity::team::Column::LeaderParticipationId.is_in(participation_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        entity::prelude::TeamJoinRequest::delete_many()
            .filter(
                Condition::any()
                    .add(
                        entity::team_join_request::Column::ParticipationId
                            .is_in(participation_ids.clone()),
                    )
                    .add(entity::team_join_request::Column::TeamId.is_in(led.clone())),
            )
            .exec(self.db)
            .await?;

        entity::prelude::TeamMember::delete_many()
            .filter(
                Condition::any()
                    .add(entity::team_member::Column::ParticipationId.is_in(participation_ids))
                    .add(entity::team_member::Column::TeamId.is_in(led.clone())),
            )
            .exec(self.db)
            .await?;

        if !led.is_empty() {
            entity::prelude::Team::delete_many()
                .filter(entity::team::Column::Id.is_in(led))
                .exec(self.db)
                .await?;
        }

        Ok(())
    }

    pub async fn delete_requests_by_status(&self, status: JoinRequestStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::TeamJoinRequest::delete_many()
            .filter(entity::team_join_request::Column::Status.eq(status.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
