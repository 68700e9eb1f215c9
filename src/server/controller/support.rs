use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ActionErrorDto, ActionResult, PageDto},
        support::{
            CreateResponseDto, CreateTicketDto, CreatedTicketDto, ResponseDto, TicketDetailDto,
            TicketPriority, TicketStatus, TicketSummaryDto, UpdateTicketDto,
        },
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::support::{CreateResponseParams, CreateTicketParams, TicketFilter},
        service::support::SupportService,
        state::AppState,
    },
};

pub static SUPPORT_TAG: &str = "support";

#[derive(Deserialize)]
pub struct TicketQuery {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// Opens a support ticket.
///
/// Attachments must already be uploaded through `/api/s3/support-upload`. An
/// acknowledgement email is queued for the caller.
///
/// # Returns
/// - `200 OK` - The generated ticket number
/// - `401 Unauthorized` - Not logged in
/// - `422 Unprocessable Entity` - Subject, message or attachments invalid
#[utoipa::path(
    post,
    path = "/api/support/tickets",
    tag = SUPPORT_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket created", body = ActionResult<CreatedTicketDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 422, description = "Invalid ticket", body = ActionErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateTicketParams::from_dto(payload, principal.user_id)?;
    let created = SupportService::new(&state.db)
        .create_ticket(&principal, params)
        .await?;

    Ok(Json(ActionResult::success(
        format!("Ticket {} created", created.ticket_number),
        created,
    )))
}

#[utoipa::path(
    get,
    path = "/api/support/tickets",
    tag = SUPPORT_TAG,
    responses(
        (status = 200, description = "Caller's tickets, newest first", body = ActionResult<Vec<TicketSummaryDto>>),
        (status = 401, description = "Not logged in", body = ActionErrorDto)
    ),
)]
pub async fn list_my_tickets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tickets = SupportService::new(&state.db).list_mine(&principal).await?;

    Ok(Json(ActionResult::success("Tickets loaded", tickets)))
}

/// A ticket with its responses. Internal notes are only included for admins.
///
/// # Access Control
/// - Ticket owner or admin
#[utoipa::path(
    get,
    path = "/api/support/tickets/{number}",
    tag = SUPPORT_TAG,
    params(
        ("number" = String, Path, description = "Ticket number")
    ),
    responses(
        (status = 200, description = "Ticket thread", body = ActionResult<TicketDetailDto>),
        (status = 403, description = "Ticket belongs to another user", body = ActionErrorDto),
        (status = 404, description = "Ticket not found", body = ActionErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ticket = SupportService::new(&state.db)
        .get_ticket(&principal, &number)
        .await?;

    Ok(Json(ActionResult::success("Ticket loaded", ticket)))
}

/// Adds a reply to a ticket.
///
/// A public admin reply queues an email to the ticket owner. Internal notes are
/// admin only and never emailed.
///
/// # Access Control
/// - Ticket owner or admin
#[utoipa::path(
    post,
    path = "/api/support/tickets/{number}/responses",
    tag = SUPPORT_TAG,
    params(
        ("number" = String, Path, description = "Ticket number")
    ),
    request_body = CreateResponseDto,
    responses(
        (status = 200, description = "Response added", body = ActionResult<ResponseDto>),
        (status = 400, description = "Ticket is closed", body = ActionErrorDto),
        (status = 403, description = "Not allowed to reply", body = ActionErrorDto),
        (status = 404, description = "Ticket not found", body = ActionErrorDto),
        (status = 422, description = "Invalid response", body = ActionErrorDto)
    ),
)]
pub async fn add_response(
    State(state): State<AppState>,
    session: Session,
    Path(number): Path<String>,
    Json(payload): Json<CreateResponseDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateResponseParams::from_dto(payload, principal.user_id)?;
    let response = SupportService::new(&state.db)
        .add_response(&principal, &number, params)
        .await?;

    Ok(Json(ActionResult::success("Response added", response)))
}

/// Paginated ticket queue for admins, filtered by status and priority.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/support/tickets",
    tag = SUPPORT_TAG,
    params(
        ("status" = Option<TicketStatus>, Query, description = "Only this status"),
        ("priority" = Option<TicketPriority>, Query, description = "Only this priority"),
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Page of tickets", body = ActionResult<PageDto<TicketSummaryDto>>),
        (status = 403, description = "Admin required", body = ActionErrorDto)
    ),
)]
pub async fn list_for_admin(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TicketQuery>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let filter = TicketFilter {
        status: query.status,
        priority: query.priority,
    };
    let page = SupportService::new(&state.db)
        .list_for_admin(&principal, filter, query.page, query.entries)
        .await?;

    Ok(Json(ActionResult::success("Tickets loaded", page)))
}

/// Changes a ticket's status, priority, or both.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/support/tickets/{number}",
    tag = SUPPORT_TAG,
    params(
        ("number" = String, Path, description = "Ticket number")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = ActionResult<TicketSummaryDto>),
        (status = 400, description = "Nothing to update", body = ActionErrorDto),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 404, description = "Ticket not found", body = ActionErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(number): Path<String>,
    Json(payload): Json<UpdateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ticket = SupportService::new(&state.db)
        .update_ticket(&principal, &number, payload.status, payload.priority)
        .await?;

    Ok(Json(ActionResult::success("Ticket updated", ticket)))
}
