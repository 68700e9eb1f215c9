use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        admin::{DataCleanupDto, DataCleanupResultDto},
        api::{ActionErrorDto, ActionResult},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::admin::DataCleanupParams,
        service::admin::AdminService,
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Bulk deletes stale rows in one transaction.
///
/// Each flag in the request selects one kind of row: cancelled registrations,
/// rejected join requests, and completed outbox jobs older than a number of days.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Number of rows deleted per kind
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/admin/data-cleanup",
    tag = ADMIN_TAG,
    request_body = DataCleanupDto,
    responses(
        (status = 200, description = "Cleanup finished", body = ActionResult<DataCleanupResultDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ActionErrorDto)
    ),
)]
pub async fn data_cleanup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DataCleanupDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = DataCleanupParams::from_dto(payload, Utc::now());
    let result = AdminService::new(&state.db)
        .data_cleanup(&principal, params)
        .await?;

    Ok(Json(ActionResult::success(
        format!("Deleted {} rows", result.total()),
        result.into_dto(),
    )))
}
