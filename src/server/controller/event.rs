use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ActionErrorDto, ActionResult},
        event::{CreateEventDto, EventDto, SetRegistrationOpenDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::CreateEventParams,
        service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = ActionResult<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ActionErrorDto)
    ),
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).list_events().await?;

    Ok(Json(ActionResult::success("Events loaded", events)))
}

/// Looks an event up by slug. The segment shares its name with the numeric id used
/// by the registration routes below it.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "The event", body = ActionResult<EventDto>),
        (status = 404, description = "No event with this slug", body = ActionErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_by_slug(&slug).await?;

    Ok(Json(ActionResult::success("Event loaded", event)))
}

/// Creates an event.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Created event
/// - `409 Conflict` - Slug already in use
/// - `422 Unprocessable Entity` - Invalid event fields
#[utoipa::path(
    post,
    path = "/api/admin/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 200, description = "Event created", body = ActionResult<EventDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 409, description = "Slug already in use", body = ActionErrorDto),
        (status = 422, description = "Invalid event fields", body = ActionErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateEventParams::from_dto(payload)?;
    let event = EventService::new(&state.db)
        .create_event(&principal, params)
        .await?;

    Ok(Json(ActionResult::success("Event created", event)))
}

/// Opens or closes registration for an event.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/events/{id}/registration",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    request_body = SetRegistrationOpenDto,
    responses(
        (status = 200, description = "Registration state updated", body = ActionResult<EventDto>),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 404, description = "Event not found", body = ActionErrorDto)
    ),
)]
pub async fn set_registration_open(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetRegistrationOpenDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .set_registration_open(&principal, id, payload.open)
        .await?;

    let message = if payload.open {
        "Registration opened"
    } else {
        "Registration closed"
    };

    Ok(Json(ActionResult::success(message, event)))
}
