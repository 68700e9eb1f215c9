use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ActionErrorDto, ActionResult},
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::UpdateProfileParams,
        service::user::UserService, state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Updates the caller's name, phone and college.
///
/// The new values are copied onto the caller's registrations and team memberships.
///
/// # Access Control
/// - Any logged in user, for their own profile
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `401 Unauthorized` - Not logged in
/// - `422 Unprocessable Entity` - Invalid profile fields
#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ActionResult<UserDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 422, description = "Invalid profile fields", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ActionErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateProfileParams::from_dto(payload)?;
    let user = UserService::new(&state.db)
        .update_profile(&principal, params)
        .await?;

    Ok(Json(ActionResult::success("Profile updated", user)))
}
