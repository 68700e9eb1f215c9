//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection is
//! a pool, the HTTP and OAuth clients are reference counted internally, and the
//! storage and mail backends sit behind `Arc`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};

use crate::server::service::{email::Mailer, storage::ObjectStorage};

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Client for Google's token and userinfo endpoints. Redirects are disabled.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// URL of Google's OpenID Connect userinfo endpoint.
    pub userinfo_url: String,

    pub storage: Arc<dyn ObjectStorage>,

    pub mailer: Arc<dyn Mailer>,

    /// Application base URL, used in email links.
    pub app_url: String,

    /// Emails granted admin on login.
    pub admin_emails: Arc<Vec<String>>,

    /// Lifetime of pre-signed upload and view URLs.
    pub signed_url_ttl: Duration,

    /// Upper bound on team size, applied on top of each event's own limit.
    pub max_team_size: i32,
}

/// Values copied out of `Config` into the state.
pub struct AppSettings {
    pub app_url: String,
    pub userinfo_url: String,
    pub admin_emails: Vec<String>,
    pub signed_url_ttl: Duration,
    pub max_team_size: i32,
}

impl AppState {
    /// Creates the application state from the connected collaborators.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Google login
    /// - `storage` - Object storage backend for uploads
    /// - `mailer` - Email backend used by the outbox dispatcher
    /// - `settings` - Plain configuration values
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        storage: Arc<dyn ObjectStorage>,
        mailer: Arc<dyn Mailer>,
        settings: AppSettings,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url: settings.userinfo_url,
            storage,
            mailer,
            app_url: settings.app_url,
            admin_emails: Arc::new(settings.admin_emails),
            signed_url_ttl: settings.signed_url_ttl,
            max_team_size: settings.max_team_size,
        }
    }
}
