use dioxus_logger::tracing;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{
        email::{LogMailer, Mailer, SmtpMailer},
        storage::{ObjectStorage, S3Storage},
    },
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database as application data and expire
/// after 7 days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the API router
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let store = SqliteStore::new(pool);

    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let session_layer = SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// HTTP client for Google's token and userinfo endpoints.
///
/// Redirects are disabled so a token exchange can never be bounced to another host.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

fn parse_url<T>(
    name: &str,
    value: &str,
    parse: impl FnOnce(String) -> Result<T, url::ParseError>,
) -> Result<T, ConfigError> {
    parse(value.to_string()).map_err(|e| ConfigError::InvalidUrl {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Builds the OAuth2 client for Google login from configuration.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = parse_url("GOOGLE_AUTH_URL", &config.google_auth_url, AuthUrl::new)?;
    let token_url = parse_url("GOOGLE_TOKEN_URL", &config.google_token_url, TokenUrl::new)?;
    let redirect_url = parse_url(
        "GOOGLE_REDIRECT_URL",
        &config.google_redirect_url,
        RedirectUrl::new,
    )?;

    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// S3 compatible storage for uploads.
pub fn setup_storage(config: &Config) -> Arc<dyn ObjectStorage> {
    tracing::info!(
        "Using object storage bucket {} at {}",
        config.storage.bucket,
        config.storage.endpoint
    );

    Arc::new(S3Storage::new(&config.storage))
}

/// SMTP mailer when `SMTP_HOST` is set, otherwise a mailer that only logs.
pub fn setup_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    match &config.mail.smtp_host {
        Some(host) => {
            tracing::info!("Sending email through SMTP relay {}", host);
            Ok(Arc::new(SmtpMailer::new(&config.mail, host)?))
        }
        None => {
            tracing::warn!("SMTP_HOST is not set, emails will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}
