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
        participation::{
            CheckoutDto, ParticipationDto, ParticipationStatus, RegistrationDto,
            ReuploadPaymentDto,
        },
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::participation::{
            CheckoutParams, ParticipationFilter, RegistrationParams, ReuploadPaymentParams,
        },
        service::participation::ParticipationService,
        state::AppState,
    },
};

pub static PARTICIPATION_TAG: &str = "participation";

#[derive(Deserialize)]
pub struct ParticipationQuery {
    pub event_id: Option<i32>,
    pub status: Option<ParticipationStatus>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// Registers the caller for an event.
///
/// Free events are confirmed immediately and a confirmation email is queued. Paid
/// events stay `REGISTERED` until the caller checks out.
///
/// # Returns
/// - `200 OK` - The new registration
/// - `400 Bad Request` - Registration for the event is closed
/// - `404 Not Found` - Unknown event
/// - `409 Conflict` - Caller is already registered
/// - `422 Unprocessable Entity` - Invalid phone or college
#[utoipa::path(
    post,
    path = "/api/events/{id}/register",
    tag = PARTICIPATION_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    request_body = RegistrationDto,
    responses(
        (status = 200, description = "Registered", body = ActionResult<ParticipationDto>),
        (status = 400, description = "Registration is closed", body = ActionErrorDto),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 404, description = "Event not found", body = ActionErrorDto),
        (status = 409, description = "Already registered", body = ActionErrorDto),
        (status = 422, description = "Invalid registration fields", body = ActionErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<RegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = RegistrationParams::from_dto(payload, &principal.email)?;
    let participation = ParticipationService::new(&state.db)
        .register(&principal, event_id, params)
        .await?;

    Ok(Json(ActionResult::success(
        "Registration successful",
        participation,
    )))
}

/// Registers for a paid event with a payment screenshot in one step.
///
/// The screenshot must already be uploaded through `/api/s3/payment-upload`. The
/// registration lands in `PAYMENT_SUBMITTED` and waits for an admin to verify it.
#[utoipa::path(
    post,
    path = "/api/events/{id}/checkout",
    tag = PARTICIPATION_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    request_body = CheckoutDto,
    responses(
        (status = 200, description = "Payment submitted", body = ActionResult<ParticipationDto>),
        (status = 400, description = "Event is free or closed", body = ActionErrorDto),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 404, description = "Event not found", body = ActionErrorDto),
        (status = 409, description = "Already registered", body = ActionErrorDto),
        (status = 422, description = "Invalid checkout fields", body = ActionErrorDto)
    ),
)]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<CheckoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CheckoutParams::from_dto(payload, principal.user_id, &principal.email)?;
    let participation = ParticipationService::new(&state.db)
        .checkout(&principal, event_id, params)
        .await?;

    Ok(Json(ActionResult::success(
        "Payment submitted for verification",
        participation,
    )))
}

#[utoipa::path(
    get,
    path = "/api/participations",
    tag = PARTICIPATION_TAG,
    responses(
        (status = 200, description = "Caller's registrations", body = ActionResult<Vec<ParticipationDto>>),
        (status = 401, description = "Not logged in", body = ActionErrorDto)
    ),
)]
pub async fn list_mine(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let participations = ParticipationService::new(&state.db)
        .list_mine(&principal)
        .await?;

    Ok(Json(ActionResult::success(
        "Registrations loaded",
        participations,
    )))
}

/// Replaces the payment screenshot of a registration that is not yet confirmed.
#[utoipa::path(
    post,
    path = "/api/reupload-payment",
    tag = PARTICIPATION_TAG,
    request_body = ReuploadPaymentDto,
    responses(
        (status = 200, description = "Screenshot replaced", body = ActionResult<ParticipationDto>),
        (status = 400, description = "Registration cannot take a new screenshot", body = ActionErrorDto),
        (status = 403, description = "Registration belongs to another user", body = ActionErrorDto),
        (status = 404, description = "Registration not found", body = ActionErrorDto),
        (status = 422, description = "Invalid screenshot", body = ActionErrorDto)
    ),
)]
pub async fn reupload_payment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReuploadPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = ReuploadPaymentParams::from_dto(payload, principal.user_id)?;
    let participation = ParticipationService::new(&state.db)
        .reupload_payment(&principal, params)
        .await?;

    Ok(Json(ActionResult::success(
        "Payment screenshot updated",
        participation,
    )))
}

/// Paginated registrations for the admin dashboard.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/participations",
    tag = PARTICIPATION_TAG,
    params(
        ("event_id" = Option<i32>, Query, description = "Only this event"),
        ("status" = Option<ParticipationStatus>, Query, description = "Only this status"),
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Page of registrations", body = ActionResult<PageDto<ParticipationDto>>),
        (status = 403, description = "Admin required", body = ActionErrorDto)
    ),
)]
pub async fn list_for_admin(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ParticipationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let filter = ParticipationFilter {
        event_id: query.event_id,
        status: query.status,
    };
    let page = ParticipationService::new(&state.db)
        .list_for_admin(&principal, filter, query.page, query.entries)
        .await?;

    Ok(Json(ActionResult::success("Registrations loaded", page)))
}

/// Confirms a submitted payment and queues the confirmation email with its invoice.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/participations/{id}/verify",
    tag = PARTICIPATION_TAG,
    params(
        ("id" = i32, Path, description = "Registration id")
    ),
    responses(
        (status = 200, description = "Payment verified", body = ActionResult<ParticipationDto>),
        (status = 400, description = "Registration has no submitted payment", body = ActionErrorDto),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 404, description = "Registration not found", body = ActionErrorDto)
    ),
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let participation = ParticipationService::new(&state.db)
        .verify_payment(&principal, id)
        .await?;

    Ok(Json(ActionResult::success("Payment verified", participation)))
}

#[utoipa::path(
    put,
    path = "/api/admin/participations/{id}/cancel",
    tag = PARTICIPATION_TAG,
    params(
        ("id" = i32, Path, description = "Registration id")
    ),
    responses(
        (status = 200, description = "Registration cancelled", body = ActionResult<ParticipationDto>),
        (status = 400, description = "Already cancelled", body = ActionErrorDto),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 404, description = "Registration not found", body = ActionErrorDto)
    ),
)]
pub async fn cancel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let participation = ParticipationService::new(&state.db)
        .cancel(&principal, id)
        .await?;

    Ok(Json(ActionResult::success(
        "Registration cancelled",
        participation,
    )))
}
