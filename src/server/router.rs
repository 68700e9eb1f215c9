use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::attachment::UploadPurpose,
    server::{
        controller::{
            accommodation::{self, ACCOMMODATION_TAG},
            admin::{self, ADMIN_TAG},
            announcement::{self, ANNOUNCEMENT_TAG},
            auth::{self, AUTH_TAG},
            event::{self, EVENT_TAG},
            participation::{self, PARTICIPATION_TAG},
            support::{self, SUPPORT_TAG},
            team::{self, TEAM_TAG},
            upload::{self, UPLOAD_TAG},
            user::{self, USER_TAG},
        },
        state::AppState,
    },
};

/// Slack for multipart boundaries and headers on top of the largest allowed file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Techfest API", description = "Registration, support and accommodation"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        user::update_profile,
        event::list_events,
        event::get_event,
        event::create_event,
        event::set_registration_open,
        participation::register,
        participation::checkout,
        participation::list_mine,
        participation::reupload_payment,
        participation::list_for_admin,
        participation::verify_payment,
        participation::cancel,
        team::create_team,
        team::get_team,
        team::request_join,
        team::leave_team,
        team::respond_to_request,
        support::create_ticket,
        support::list_my_tickets,
        support::get_ticket,
        support::add_response,
        support::list_for_admin,
        support::update_ticket,
        upload::presign_support_upload,
        upload::presign_payment_upload,
        upload::upload,
        upload::view_attachment,
        upload::view_announcement_attachment,
        accommodation::list_stays,
        accommodation::list_food,
        accommodation::book_stay,
        accommodation::list_my_bookings,
        accommodation::list_bookings_for_admin,
        accommodation::verify_booking,
        accommodation::create_stay,
        accommodation::delete_stay,
        accommodation::create_food,
        accommodation::delete_food,
        announcement::list_announcements,
        announcement::create_announcement,
        announcement::delete_announcement,
        admin::data_cleanup,
    ),
    tags(
        (name = AUTH_TAG, description = "Google login and session"),
        (name = USER_TAG, description = "Profile of the logged in user"),
        (name = EVENT_TAG, description = "Techfest events"),
        (name = PARTICIPATION_TAG, description = "Registrations and payments"),
        (name = TEAM_TAG, description = "Teams and join requests"),
        (name = SUPPORT_TAG, description = "Support tickets"),
        (name = UPLOAD_TAG, description = "File uploads and signed view URLs"),
        (name = ACCOMMODATION_TAG, description = "Stays, food and bookings"),
        (name = ANNOUNCEMENT_TAG, description = "Announcements"),
        (name = ADMIN_TAG, description = "Maintenance"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let upload_limit = UploadPurpose::Support.max_size() as usize + MULTIPART_OVERHEAD;

    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/user/profile", put(user::update_profile))
        .route("/api/events", get(event::list_events))
        .route("/api/events/{id}", get(event::get_event))
        .route("/api/events/{id}/register", post(participation::register))
        .route("/api/events/{id}/checkout", post(participation::checkout))
        .route("/api/participations", get(participation::list_mine))
        .route("/api/reupload-payment", post(participation::reupload_payment))
        .route("/api/teams", post(team::create_team))
        .route("/api/teams/{id}", get(team::get_team))
        .route("/api/teams/{id}/join-requests", post(team::request_join))
        .route("/api/teams/{id}/leave", post(team::leave_team))
        .route("/api/team-requests/{id}", put(team::respond_to_request))
        .route(
            "/api/support/tickets",
            post(support::create_ticket).get(support::list_my_tickets),
        )
        .route("/api/support/tickets/{number}", get(support::get_ticket))
        .route(
            "/api/support/tickets/{number}/responses",
            post(support::add_response),
        )
        .route("/api/s3/support-upload", post(upload::presign_support_upload))
        .route("/api/s3/payment-upload", post(upload::presign_payment_upload))
        .route(
            "/api/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/view-attachment", get(upload::view_attachment))
        .route(
            "/api/view-announcement-attachment",
            get(upload::view_announcement_attachment),
        )
        .route("/api/accommodation/stays", get(accommodation::list_stays))
        .route("/api/accommodation/food", get(accommodation::list_food))
        .route(
            "/api/accommodation/bookings",
            post(accommodation::book_stay).get(accommodation::list_my_bookings),
        )
        .route("/api/announcements", get(announcement::list_announcements))
        .merge(admin_router())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/events", post(event::create_event))
        .route(
            "/api/admin/events/{id}/registration",
            put(event::set_registration_open),
        )
        .route(
            "/api/admin/participations",
            get(participation::list_for_admin),
        )
        .route(
            "/api/admin/participations/{id}/verify",
            put(participation::verify_payment),
        )
        .route(
            "/api/admin/participations/{id}/cancel",
            put(participation::cancel),
        )
        .route("/api/admin/support/tickets", get(support::list_for_admin))
        .route(
            "/api/admin/support/tickets/{number}",
            put(support::update_ticket),
        )
        .route("/api/admin/stays", post(accommodation::create_stay))
        .route("/api/admin/stays/{id}", delete(accommodation::delete_stay))
        .route("/api/admin/food", post(accommodation::create_food))
        .route("/api/admin/food/{id}", delete(accommodation::delete_food))
        .route(
            "/api/admin/bookings",
            get(accommodation::list_bookings_for_admin),
        )
        .route(
            "/api/admin/bookings/{id}/verify",
            put(accommodation::verify_booking),
        )
        .route(
            "/api/admin/announcements",
            post(announcement::create_announcement),
        )
        .route(
            "/api/admin/announcements/{id}",
            delete(announcement::delete_announcement),
        )
        .route("/api/admin/data-cleanup", post(admin::data_cleanup))
}
