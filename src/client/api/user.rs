use crate::{
    client::{
        api::helper::{get, parse_action, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::ActionResult,
        user::{UpdateProfileDto, UserDto},
    },
};

/// The logged in user, `None` when the session is anonymous.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    Ok(parse_action::<UserDto>(response).await?.data)
}

pub async fn update_profile(payload: &UpdateProfileDto) -> Result<ActionResult<UserDto>, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(put("/api/user/profile").body(body)).await?;
    parse_action(response).await
}
