use crate::{
    model::{
        api::FieldErrorDto,
        team::{JoinRequestDto, JoinRequestStatus, TeamDto, TeamMemberDto},
    },
    server::{error::validation::ValidationError, model::check_length},
};

pub fn validate_team_name(name: &str) -> Result<String, ValidationError> {
    let mut errors: Vec<FieldErrorDto> = Vec::new();
    check_length(&mut errors, "name", "Team name", name, 3, 50);
    ValidationError::check(errors)?;
    Ok(name.trim().to_string())
}

pub fn validate_join_message(message: Option<String>) -> Result<Option<String>, ValidationError> {
    let message = message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());
    if let Some(m) = &message {
        if m.chars().count() > 500 {
            return Err(ValidationError::field(
                "message",
                "Message must be at most 500 characters",
            ));
        }
    }
    Ok(message)
}

pub fn member_dto(member: entity::team_member::Model, leader_participation_id: i32) -> TeamMemberDto {
    TeamMemberDto {
        leader: member.participation_id == leader_participation_id,
        participation_id: member.participation_id,
        user_id: member.user_id,
        name: member.name,
        email: member.email,
        phone: member.phone,
        college: member.college,
        joined_at: member.joined_at,
    }
}

pub fn join_request_dto(request: entity::team_join_request::Model) -> JoinRequestDto {
    JoinRequestDto {
        id: request.id,
        team_id: request.team_id,
        user_id: request.user_id,
        name: request.name,
        email: request.email,
        college: request.college,
        message: request.message,
        status: JoinRequestStatus::parse(&request.status).unwrap_or(JoinRequestStatus::Pending),
        created_at: request.created_at,
        responded_at: request.responded_at,
    }
}

pub fn team_dto(
    team: entity::team::Model,
    members: Vec<entity::team_member::Model>,
    pending: Vec<entity::team_join_request::Model>,
) -> TeamDto {
    let leader = team.leader_participation_id;
    TeamDto {
        id: team.id,
        event_id: team.event_id,
        name: team.name,
        leader_participation_id: leader,
        members: members.into_iter().map(|m| member_dto(m, leader)).collect(),
        pending_requests: pending.into_iter().map(join_request_dto).collect(),
        created_at: team.created_at,
    }
}
