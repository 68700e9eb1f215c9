use axum::{
    extract::{Multipart, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ActionErrorDto, ActionResult},
        upload::{PresignUploadDto, PresignedUploadDto, UploadedFileDto, ViewAttachmentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::upload::UploadService,
        state::AppState,
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Multipart field holding the file for `/api/upload`.
const FILE_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ViewAttachmentQuery {
    pub key: String,
}

#[derive(Deserialize)]
pub struct ViewAnnouncementAttachmentQuery {
    pub id: i32,
}

fn upload_service(state: &AppState) -> UploadService<'_> {
    UploadService::new(&state.db, state.storage.as_ref(), state.signed_url_ttl)
}

/// Signs a PUT URL for a support ticket attachment.
///
/// The file's type and size are checked before anything is signed. The returned key
/// is then passed along with the ticket or response that uses the file.
///
/// # Returns
/// - `200 OK` - Upload URL, object key and public URL
/// - `401 Unauthorized` - Not logged in
/// - `422 Unprocessable Entity` - File type not allowed or file too large
#[utoipa::path(
    post,
    path = "/api/s3/support-upload",
    tag = UPLOAD_TAG,
    request_body = PresignUploadDto,
    responses(
        (status = 200, description = "Upload URL signed", body = ActionResult<PresignedUploadDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 422, description = "File rejected", body = ActionErrorDto)
    ),
)]
pub async fn presign_support_upload(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PresignUploadDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let presigned = upload_service(&state)
        .presign_support_upload(&principal, payload)
        .await?;

    Ok(Json(ActionResult::success("Upload URL created", presigned)))
}

/// Signs a PUT URL for a payment screenshot. Only JPEG, PNG and WebP images up to
/// 5 MB are accepted.
#[utoipa::path(
    post,
    path = "/api/s3/payment-upload",
    tag = UPLOAD_TAG,
    request_body = PresignUploadDto,
    responses(
        (status = 200, description = "Upload URL signed", body = ActionResult<PresignedUploadDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 422, description = "File rejected", body = ActionErrorDto)
    ),
)]
pub async fn presign_payment_upload(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PresignUploadDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let presigned = upload_service(&state)
        .presign_payment_upload(&principal, payload)
        .await?;

    Ok(Json(ActionResult::success("Upload URL created", presigned)))
}

/// Uploads a single file through the server.
///
/// Expects a multipart form with a `file` field. Used where a direct browser upload
/// is not practical, such as announcement attachments.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Form with a `file` field"),
    responses(
        (status = 200, description = "File stored", body = ActionResult<UploadedFileDto>),
        (status = 400, description = "Missing or unreadable file field", body = ActionErrorDto),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 422, description = "File rejected", body = ActionErrorDto)
    ),
)]
pub async fn upload(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?;

        let uploaded = upload_service(&state)
            .upload(&principal, &file_name, &content_type, bytes.to_vec())
            .await?;

        return Ok(Json(ActionResult::success("File uploaded", uploaded)));
    }

    Err(AppError::BadRequest("No file was uploaded".to_string()))
}

/// Signs a short-lived GET URL for a stored attachment.
///
/// # Access Control
/// - Ticket attachments: ticket owner or admin; internal note attachments: admin
/// - Payment screenshots: uploader or admin
#[utoipa::path(
    get,
    path = "/api/view-attachment",
    tag = UPLOAD_TAG,
    params(
        ("key" = String, Query, description = "Object key of the attachment")
    ),
    responses(
        (status = 200, description = "Signed view URL", body = ActionResult<ViewAttachmentDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 403, description = "Not allowed to view this file", body = ActionErrorDto),
        (status = 404, description = "Attachment not found", body = ActionErrorDto)
    ),
)]
pub async fn view_attachment(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ViewAttachmentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let view = upload_service(&state)
        .view_attachment(&principal, &query.key)
        .await?;

    Ok(Json(ActionResult::success("Attachment ready", view)))
}

/// Signs a GET URL for an announcement's attachment. Announcements are public.
#[utoipa::path(
    get,
    path = "/api/view-announcement-attachment",
    tag = UPLOAD_TAG,
    params(
        ("id" = i32, Query, description = "Announcement id")
    ),
    responses(
        (status = 200, description = "Signed view URL", body = ActionResult<ViewAttachmentDto>),
        (status = 404, description = "Announcement or attachment not found", body = ActionErrorDto)
    ),
)]
pub async fn view_announcement_attachment(
    State(state): State<AppState>,
    Query(query): Query<ViewAnnouncementAttachmentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let view = upload_service(&state)
        .view_announcement_attachment(query.id)
        .await?;

    Ok(Json(ActionResult::success("Attachment ready", view)))
}
