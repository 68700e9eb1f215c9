//! Team formation for team events.
//!
//! Members are identified by their participation, so a user can be on at most one
//! team per event. Team size is capped by both the event's own limit and the
//! configured `MAX_TEAM_SIZE`.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        participation::ParticipationStatus,
        team::{JoinRequestDto, JoinRequestStatus, TeamDto},
    },
    server::{
        data::{
            event::EventRepository, is_unique_violation,
            participation::ParticipationRepository, team::TeamRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            auth::Principal,
            participation::parse_status,
            team::{join_request_dto, team_dto},
        },
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
    max_team_size: i32,
}

/// Active participation of `user_id` in `event_id`.
async fn active_participation<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    event_id: i32,
) -> Result<entity::participation::Model, AppError> {
    ParticipationRepository::new(db)
        .find_by_user_and_event(user_id, event_id)
        .await?
        .filter(|p| parse_status(&p.status) != ParticipationStatus::Cancelled)
        .ok_or_else(|| AppError::BadRequest("Register for the event first".to_string()))
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection, max_team_size: i32) -> Self {
        Self { db, max_team_size }
    }

    /// Effective capacity for a team of `event`.
    pub fn capacity(&self, event: &entity::event::Model) -> u64 {
        event.max_team_size.min(self.max_team_size).max(1) as u64
    }

    async fn load(&self, team: entity::team::Model) -> Result<TeamDto, AppError> {
        let repo = TeamRepository::new(self.db);
        let members = repo.get_members(team.id).await?;
        let pending = repo.get_pending_requests(team.id).await?;

        Ok(team_dto(team, members, pending))
    }

    pub async fn get_team(&self, team_id: i32) -> Result<TeamDto, AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        self.load(team).await
    }

    /// Creates a team led by the caller, who becomes its first member.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The new team
    /// - `Err(AppError::NotFound)` - Event does not exist
    /// - `Err(AppError::BadRequest)` - Not a team event, or caller is not registered
    /// - `Err(AppError::Conflict)` - Caller is already on a team, or the name is taken
    pub async fn create_team(
        &self,
        principal: &Principal,
        event_id: i32,
        name: String,
    ) -> Result<TeamDto, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        if !event.team_event {
            return Err(AppError::BadRequest("This is not a team event".to_string()));
        }

        let participation = active_participation(self.db, principal.user_id, event.id).await?;
        if TeamRepository::new(self.db)
            .find_membership(participation.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You are already on a team for this event".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let team = match TeamRepository::new(&txn).create(name, &participation).await {
            Ok(team) => team,
            Err(err) if is_unique_violation(&err) => {
                return Err(AppError::Conflict(
                    "A team with this name already exists, or you are already on a team"
                        .to_string(),
                ))
            }
            Err(err) => return Err(err.into()),
        };
        txn.commit().await?;

        self.load(team).await
    }

    /// Asks to join a team of an event the caller is registered for.
    ///
    /// # Returns
    /// - `Ok(JoinRequestDto)` - The pending request
    /// - `Err(AppError::NotFound)` - Team does not exist
    /// - `Err(AppError::BadRequest)` - Caller is not registered for the team's event
    /// - `Err(AppError::Conflict)` - Caller is on a team or already asked to join this one
    pub async fn request_join(
        &self,
        principal: &Principal,
        team_id: i32,
        message: Option<String>,
    ) -> Result<JoinRequestDto, AppError> {
        let repo = TeamRepository::new(self.db);

        let team = repo
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
        let participation =
            active_participation(self.db, principal.user_id, team.event_id).await?;

        if repo.find_membership(participation.id).await?.is_some() {
            return Err(AppError::Conflict(
                "You are already on a team for this event".to_string(),
            ));
        }
        if repo.has_pending_request(team.id, participation.id).await? {
            return Err(AppError::Conflict(
                "You already asked to join this team".to_string(),
            ));
        }

        let request = repo
            .create_join_request(team.id, &participation, message)
            .await?;

        Ok(join_request_dto(request))
    }

    /// Approves or rejects a pending join request. Only the team leader may answer.
    ///
    /// Approval adds the requester as a member, provided the team has room and the
    /// requester has not joined another team in the meantime.
    ///
    /// # Returns
    /// - `Ok(JoinRequestDto)` - The answered request
    /// - `Err(AppError::NotFound)` - Request, team or requester's registration is gone
    /// - `Err(AppError::AuthErr)` - Caller does not lead the team
    /// - `Err(AppError::BadRequest)` - Request was already answered, or the team is full
    /// - `Err(AppError::Conflict)` - Requester is already on a team
    pub async fn respond_to_request(
        &self,
        principal: &Principal,
        request_id: i32,
        approve: bool,
    ) -> Result<JoinRequestDto, AppError> {
        let repo = TeamRepository::new(self.db);

        let request = repo
            .find_join_request(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))?;
        let team = repo
            .find_by_id(request.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let leader = ParticipationRepository::new(self.db)
            .find_by_id(team.leader_participation_id)
            .await?;
        if leader.map(|l| l.user_id) != Some(principal.user_id) {
            return Err(AuthError::AccessDenied(
                principal.user_id,
                format!("not the leader of team {}", team.id),
            )
            .into());
        }

        if JoinRequestStatus::parse(&request.status) != Some(JoinRequestStatus::Pending) {
            return Err(AppError::BadRequest(
                "This request has already been answered".to_string(),
            ));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;
        let txn_repo = TeamRepository::new(&txn);

        let status = if approve {
            let participation = ParticipationRepository::new(&txn)
                .find_by_id(request.participation_id)
                .await?
                .filter(|p| parse_status(&p.status) != ParticipationStatus::Cancelled)
                .ok_or_else(|| {
                    AppError::NotFound("The requester is no longer registered".to_string())
                })?;
            if txn_repo.find_membership(participation.id).await?.is_some() {
                return Err(AppError::Conflict(
                    "The requester is already on a team".to_string(),
                ));
            }

            let event = EventRepository::new(&txn)
                .find_by_id(team.event_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
            if txn_repo.count_members(team.id).await? >= self.capacity(&event) {
                return Err(AppError::BadRequest("This team is full".to_string()));
            }

            match txn_repo.add_member(team.id, &participation).await {
                Ok(_) => {}
                Err(err) if is_unique_violation(&err) => {
                    return Err(AppError::Conflict(
                        "The requester is already on a team".to_string(),
                    ))
                }
                Err(err) => return Err(err.into()),
            }
            JoinRequestStatus::Approved
        } else {
            JoinRequestStatus::Rejected
        };

        let request = txn_repo.set_request_status(request, status, now).await?;
        txn.commit().await?;

        Ok(join_request_dto(request))
    }

    /// Removes the caller from a team.
    ///
    /// The leader cannot leave while other members remain. A leader who is the only
    /// member dissolves the team, dropping its pending requests.
    pub async fn leave_team(&self, principal: &Principal, team_id: i32) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        let team = repo
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
        let participation = ParticipationRepository::new(self.db)
            .find_by_user_and_event(principal.user_id, team.event_id)
            .await?;
        let membership = match &participation {
            Some(p) => repo.find_membership(p.id).await?,
            None => None,
        };
        let Some(membership) = membership.filter(|m| m.team_id == team.id) else {
            return Err(AppError::BadRequest(
                "You are not a member of this team".to_string(),
            ));
        };

        if membership.participation_id != team.leader_participation_id {
            repo.remove_member(team.id, membership.participation_id)
                .await?;
            return Ok(());
        }

        if repo.count_members(team.id).await? > 1 {
            return Err(AppError::BadRequest(
                "The team leader cannot leave while other members remain".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        TeamRepository::new(&txn)
            .detach_participations(vec![membership.participation_id])
            .await?;
        txn.commit().await?;

        Ok(())
    }
}
