use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ActionErrorDto, ActionResult},
        team::{
            CreateJoinRequestDto, CreateTeamDto, JoinRequestDto, RespondJoinRequestDto, TeamDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::team::{validate_join_message, validate_team_name},
        service::team::TeamService,
        state::AppState,
    },
};

pub static TEAM_TAG: &str = "team";

/// Creates a team led by the caller.
///
/// The caller must hold a registration for the event that is not cancelled and is
/// not already part of a team.
///
/// # Returns
/// - `200 OK` - The new team
/// - `400 Bad Request` - Event is not a team event, or the caller is not registered
/// - `409 Conflict` - Caller already belongs to a team for the event
/// - `422 Unprocessable Entity` - Invalid team name
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 200, description = "Team created", body = ActionResult<TeamDto>),
        (status = 400, description = "Team cannot be created", body = ActionErrorDto),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 409, description = "Already in a team", body = ActionErrorDto),
        (status = 422, description = "Invalid team name", body = ActionErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let name = validate_team_name(&payload.name)?;
    let team = TeamService::new(&state.db, state.max_team_size)
        .create_team(&principal, payload.event_id, name)
        .await?;

    Ok(Json(ActionResult::success("Team created", team)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team with members", body = ActionResult<TeamDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 404, description = "Team not found", body = ActionErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = TeamService::new(&state.db, state.max_team_size)
        .get_team(id)
        .await?;

    Ok(Json(ActionResult::success("Team loaded", team)))
}

/// Asks to join a team. The team leader approves or rejects the request.
#[utoipa::path(
    post,
    path = "/api/teams/{id}/join-requests",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team id")
    ),
    request_body = CreateJoinRequestDto,
    responses(
        (status = 200, description = "Join request sent", body = ActionResult<JoinRequestDto>),
        (status = 400, description = "Team is full or caller is not registered", body = ActionErrorDto),
        (status = 404, description = "Team not found", body = ActionErrorDto),
        (status = 409, description = "Pending request or existing membership", body = ActionErrorDto)
    ),
)]
pub async fn request_join(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateJoinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = validate_join_message(payload.message)?;
    let request = TeamService::new(&state.db, state.max_team_size)
        .request_join(&principal, id, message)
        .await?;

    Ok(Json(ActionResult::success("Join request sent", request)))
}

/// Leaves a team. A leader can only leave once they are the last member, which
/// dissolves the team.
#[utoipa::path(
    post,
    path = "/api/teams/{id}/leave",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Left the team", body = ActionResult<()>),
        (status = 400, description = "Leader cannot leave a team with members", body = ActionErrorDto),
        (status = 404, description = "Caller is not in this team", body = ActionErrorDto)
    ),
)]
pub async fn leave_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TeamService::new(&state.db, state.max_team_size)
        .leave_team(&principal, id)
        .await?;

    Ok(Json(ActionResult::done("You left the team")))
}

/// Approves or rejects a pending join request.
///
/// # Access Control
/// - Leader of the requested team
#[utoipa::path(
    put,
    path = "/api/team-requests/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Join request id")
    ),
    request_body = RespondJoinRequestDto,
    responses(
        (status = 200, description = "Request answered", body = ActionResult<JoinRequestDto>),
        (status = 400, description = "Request is not pending or team is full", body = ActionErrorDto),
        (status = 403, description = "Caller is not the team leader", body = ActionErrorDto),
        (status = 404, description = "Request not found", body = ActionErrorDto)
    ),
)]
pub async fn respond_to_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RespondJoinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let request = TeamService::new(&state.db, state.max_team_size)
        .respond_to_request(&principal, id, payload.approve)
        .await?;

    let message = if payload.approve {
        "Request approved"
    } else {
        "Request rejected"
    };

    Ok(Json(ActionResult::success(message, request)))
}
