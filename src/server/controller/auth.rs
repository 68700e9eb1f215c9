use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ActionErrorDto, ActionResult},
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::{auth::GoogleAuthService, user::UserService},
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Query parameters Google appends to the redirect back to the application.
///
/// `error` is set instead of `code` when the user declines the consent screen.
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Redirects the browser to Google's consent screen.
///
/// A fresh CSRF token is stored in the session and echoed back by Google as the
/// `state` parameter of the callback.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google sign-in"),
        (status = 500, description = "Internal server error", body = ActionErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        GoogleAuthService::new(&state.http_client, &state.oauth_client, &state.userinfo_url);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes a Google login.
///
/// Validates the CSRF state, exchanges the code, upserts the user and stores the
/// user's id in the session before sending the browser home.
///
/// # Returns
/// - `307 Temporary Redirect` - To `/` on success, to `/login?error=...` when the user
///   declined
/// - `401 Unauthorized` - CSRF state mismatch or unverified Google email
/// - `500 Internal Server Error` - Token exchange or database failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = Option<String>, Query, description = "CSRF state issued at login"),
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("error" = Option<String>, Query, description = "Error reported by Google")
    ),
    responses(
        (status = 307, description = "Redirect into the application"),
        (status = 401, description = "Login could not be verified", body = ActionErrorDto),
        (status = 500, description = "Internal server error", body = ActionErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let stored = CsrfSession::new(&session).take_token().await?;

    if let Some(error) = params.error {
        tracing::info!("Google login was not completed: {}", error);
        return Ok(Redirect::temporary("/login?error=access_denied"));
    }

    match (stored, params.state) {
        (Some(stored), Some(returned)) if stored == returned => {}
        _ => return Err(AuthError::CsrfValidationFailed.into()),
    }

    let code = params
        .code
        .ok_or_else(|| AppError::BadRequest("Missing authorization code".to_string()))?;

    let auth_service =
        GoogleAuthService::new(&state.http_client, &state.oauth_client, &state.userinfo_url);
    let info = auth_service.callback(code).await?;

    let user = UserService::new(&state.db)
        .sign_in(info, &state.admin_emails)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} signed in", user.id);

    Ok(Redirect::temporary("/"))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the login page")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary("/login"))
}

/// The logged in user, or no data for an anonymous caller.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user, absent when logged out", body = ActionResult<UserDto>),
        (status = 500, description = "Internal server error", body = ActionErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(principal) = AuthGuard::new(&state.db, &session).optional().await? else {
        return Ok(Json(ActionResult::<UserDto>::empty("Not logged in")));
    };

    let user = UserService::new(&state.db).get_current(&principal).await?;

    Ok(Json(ActionResult::success("Current user", user)))
}
