use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        accommodation::{BookStayDto, BookingDto, CreateFoodDto, CreateStayDto, FoodDto, StayDto},
        api::{ActionErrorDto, ActionResult, PageDto},
        participation::ParticipationStatus,
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::accommodation::{BookStayParams, CreateFoodParams, CreateStayParams},
        service::accommodation::AccommodationService,
        state::AppState,
    },
};

pub static ACCOMMODATION_TAG: &str = "accommodation";

#[derive(Deserialize)]
pub struct BookingQuery {
    pub status: Option<ParticipationStatus>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

#[utoipa::path(
    get,
    path = "/api/accommodation/stays",
    tag = ACCOMMODATION_TAG,
    responses(
        (status = 200, description = "Available stays", body = ActionResult<Vec<StayDto>>)
    ),
)]
pub async fn list_stays(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stays = AccommodationService::new(&state.db).list_stays().await?;

    Ok(Json(ActionResult::success("Stays loaded", stays)))
}

/// Food menu ordered by weekday, then meal.
#[utoipa::path(
    get,
    path = "/api/accommodation/food",
    tag = ACCOMMODATION_TAG,
    responses(
        (status = 200, description = "Food menu", body = ActionResult<Vec<FoodDto>>)
    ),
)]
pub async fn list_food(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let food = AccommodationService::new(&state.db).list_food().await?;

    Ok(Json(ActionResult::success("Food menu loaded", food)))
}

/// Books a stay with a payment screenshot.
///
/// The amount is the stay's nightly price times nights times guests. The booking
/// waits in `PAYMENT_SUBMITTED` until an admin verifies it.
///
/// # Returns
/// - `200 OK` - The booking
/// - `404 Not Found` - Unknown stay
/// - `422 Unprocessable Entity` - Invalid dates, guests, phone or screenshot
#[utoipa::path(
    post,
    path = "/api/accommodation/bookings",
    tag = ACCOMMODATION_TAG,
    request_body = BookStayDto,
    responses(
        (status = 200, description = "Booking submitted", body = ActionResult<BookingDto>),
        (status = 401, description = "Not logged in", body = ActionErrorDto),
        (status = 404, description = "Stay not found", body = ActionErrorDto),
        (status = 422, description = "Invalid booking", body = ActionErrorDto)
    ),
)]
pub async fn book_stay(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BookStayDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = BookStayParams::from_dto(payload, principal.user_id)?;
    let booking = AccommodationService::new(&state.db)
        .book_stay(&principal, params)
        .await?;

    Ok(Json(ActionResult::success(
        "Booking submitted for verification",
        booking,
    )))
}

#[utoipa::path(
    get,
    path = "/api/accommodation/bookings",
    tag = ACCOMMODATION_TAG,
    responses(
        (status = 200, description = "Caller's bookings", body = ActionResult<Vec<BookingDto>>),
        (status = 401, description = "Not logged in", body = ActionErrorDto)
    ),
)]
pub async fn list_my_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = AccommodationService::new(&state.db)
        .list_my_bookings(&principal)
        .await?;

    Ok(Json(ActionResult::success("Bookings loaded", bookings)))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ACCOMMODATION_TAG,
    params(
        ("status" = Option<ParticipationStatus>, Query, description = "Only this status"),
        ("page" = Option<u64>, Query, description = "Zero-based page"),
        ("entries" = Option<u64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Page of bookings", body = ActionResult<PageDto<BookingDto>>),
        (status = 403, description = "Admin required", body = ActionErrorDto)
    ),
)]
pub async fn list_bookings_for_admin(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<BookingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let page = AccommodationService::new(&state.db)
        .list_for_admin(&principal, query.status, query.page, query.entries)
        .await?;

    Ok(Json(ActionResult::success("Bookings loaded", page)))
}

/// Confirms a booking payment and queues the accommodation invoice email.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/bookings/{id}/verify",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking confirmed", body = ActionResult<BookingDto>),
        (status = 400, description = "Booking is not awaiting verification", body = ActionErrorDto),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 404, description = "Booking not found", body = ActionErrorDto)
    ),
)]
pub async fn verify_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let booking = AccommodationService::new(&state.db)
        .verify_booking(&principal, id)
        .await?;

    Ok(Json(ActionResult::success("Booking confirmed", booking)))
}

#[utoipa::path(
    post,
    path = "/api/admin/stays",
    tag = ACCOMMODATION_TAG,
    request_body = CreateStayDto,
    responses(
        (status = 200, description = "Stay created", body = ActionResult<StayDto>),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 422, description = "Invalid stay", body = ActionErrorDto)
    ),
)]
pub async fn create_stay(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateStayDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateStayParams::from_dto(payload)?;
    let stay = AccommodationService::new(&state.db)
        .create_stay(&principal, params)
        .await?;

    Ok(Json(ActionResult::success("Stay created", stay)))
}

/// Deletes a stay. Stays that already have bookings are kept.
#[utoipa::path(
    delete,
    path = "/api/admin/stays/{id}",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Stay id")
    ),
    responses(
        (status = 200, description = "Stay deleted", body = ActionResult<()>),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 404, description = "Stay not found", body = ActionErrorDto),
        (status = 409, description = "Stay has bookings", body = ActionErrorDto)
    ),
)]
pub async fn delete_stay(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AccommodationService::new(&state.db)
        .delete_stay(&principal, id)
        .await?;

    Ok(Json(ActionResult::done("Stay deleted")))
}

#[utoipa::path(
    post,
    path = "/api/admin/food",
    tag = ACCOMMODATION_TAG,
    request_body = CreateFoodDto,
    responses(
        (status = 200, description = "Menu entry created", body = ActionResult<FoodDto>),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 422, description = "Invalid menu entry", body = ActionErrorDto)
    ),
)]
pub async fn create_food(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFoodDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateFoodParams::from_dto(payload)?;
    let food = AccommodationService::new(&state.db)
        .create_food(&principal, params)
        .await?;

    Ok(Json(ActionResult::success("Menu entry created", food)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/food/{id}",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Menu entry id")
    ),
    responses(
        (status = 200, description = "Menu entry deleted", body = ActionResult<()>),
        (status = 403, description = "Admin required", body = ActionErrorDto),
        (status = 404, description = "Menu entry not found", body = ActionErrorDto)
    ),
)]
pub async fn delete_food(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AccommodationService::new(&state.db)
        .delete_food(&principal, id)
        .await?;

    Ok(Json(ActionResult::done("Menu entry deleted")))
}
