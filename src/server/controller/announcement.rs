use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        announcement::{AnnouncementDto, CreateAnnouncementDto},
        api::{ActionErrorDto, ActionResult},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::announcement::CreateAnnouncementParams,
        service::announcement::AnnouncementService,
        state::AppState,
    },
};

pub static ANNOUNCEMENT_TAG: &str = "announcement";

#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    responses(
        (status = 200, description = "Announcements, newest first", body = ActionResult<Vec<AnnouncementDto>>),
        (status = 500, description = "Internal server error", body = ActionErrorDto)
    ),
)]
pub async fn list_announcements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let announcements = AnnouncementService::new(&state.db, state.storage.as_ref()).list().await?;

    Ok(Json(ActionResult::success(
        "Announcements loaded",
        announcements,
    )))
}

/// Publishes an announcement. The body is markdown; an attachment uploaded through
/// `/api/upload` may be linked by key.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/announcements",
    tag = ANNOUNCEMENT_TAG,
    request_body = CreateAnnouncementDto,
    responses(
        (status = 200, description = "Announcement published", body = ActionResult<AnnouncementDto>),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 422, description = "Invalid announcement", body = ActionErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateAnnouncementParams::from_dto(payload, principal.user_id)?;
    let announcement = AnnouncementService::new(&state.db, state.storage.as_ref())
        .create(&principal, params)
        .await?;

    Ok(Json(ActionResult::success(
        "Announcement published",
        announcement,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement id")
    ),
    responses(
        (status = 200, description = "Announcement deleted", body = ActionResult<()>),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 404, description = "Announcement not found", body = ActionErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AnnouncementService::new(&state.db, state.storage.as_ref())
        .delete(&principal, id)
        .await?;

    Ok(Json(ActionResult::done("Announcement deleted")))
}
