use crate::{
    client::{
        api::helper::{get, parse_action, parse_response, post, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::ActionResult,
        team::{
            CreateJoinRequestDto, CreateTeamDto, JoinRequestDto, RespondJoinRequestDto, TeamDto,
        },
    },
};

pub async fn create_team(payload: &CreateTeamDto) -> Result<ActionResult<TeamDto>, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/teams").body(body)).await?;
    parse_action(response).await
}

pub async fn get_team(team_id: i32) -> Result<TeamDto, ApiError> {
    let url = format!("/api/teams/{}", team_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn request_join(
    team_id: i32,
    payload: &CreateJoinRequestDto,
) -> Result<ActionResult<JoinRequestDto>, ApiError> {
    let url = format!("/api/teams/{}/join-requests", team_id);
    let body = serialize_json(payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_action(response).await
}

pub async fn leave_team(team_id: i32) -> Result<ActionResult<()>, ApiError> {
    let url = format!("/api/teams/{}/leave", team_id);
    let response = send_request(post(&url)).await?;
    parse_action(response).await
}

pub async fn respond_to_request(
    request_id: i32,
    approve: bool,
) -> Result<ActionResult<JoinRequestDto>, ApiError> {
    let url = format!("/api/team-requests/{}", request_id);
    let body = serialize_json(&RespondJoinRequestDto { approve })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_action(response).await
}
