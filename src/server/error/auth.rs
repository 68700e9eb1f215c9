use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use oauth2::{basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// The session references a user that no longer exists.
    #[error("User {0} in session does not exist")]
    UserNotInDatabase(i32),

    /// The action requires an admin.
    #[error("User {0} is not an admin")]
    AdminRequired(i32),

    /// The user is authenticated but does not own the resource.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// CSRF state in the OAuth callback does not match the session.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for a token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// The identity provider returned a profile without a verified email.
    #[error("Google account has no verified email")]
    EmailNotVerified,
}

impl
    From<
        RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    > for AuthError
{
    fn from(
        err: RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ) -> Self {
        AuthError::TokenExchange(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AuthenticationRequired | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AdminRequired(_) => {
                error_response(StatusCode::FORBIDDEN, "Admin access required")
            }
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "You do not have access to this resource",
            ),
            Self::CsrfValidationFailed | Self::TokenExchange(_) | Self::EmailNotVerified => {
                error_response(
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
            }
        }
    }
}
