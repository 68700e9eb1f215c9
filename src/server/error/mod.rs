//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers and services. It wraps
//! the domain-specific errors and implements `IntoResponse`, rendering every failure
//! as the uniform `{status: "error", message, errors?}` envelope. Server-side
//! failures are logged and reported to the client with a generic message.

pub mod auth;
pub mod config;
pub mod document;
pub mod email;
pub mod storage;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ActionErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, document::DocumentError, email::EmailError,
        storage::StorageError, validation::ValidationError,
    },
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    StorageErr(#[from] StorageError),

    #[error(transparent)]
    EmailErr(#[from] EmailError),

    #[error(transparent)]
    DocumentErr(#[from] DocumentError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalError(String),
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::BadRequest(format!("Invalid upload: {}", err.body_text()))
    }
}

/// Builds an error envelope response with the given status code.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ActionErrorDto::new(message))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and responds with a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
