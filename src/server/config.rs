use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,
    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,

    /// Emails granted admin on login.
    pub admin_emails: Vec<String>,

    pub storage: StorageConfig,
    pub mail: MailConfig,

    pub max_team_size: i32,
}

pub struct StorageConfig {
    pub bucket: String,
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub signed_url_ttl_seconds: u64,
}

pub struct MailConfig {
    pub from: String,
    /// Unset means emails are only logged.
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = var_or("APP_URL", "http://localhost:8080");
        let google_redirect_url = std::env::var("GOOGLE_REDIRECT_URL")
            .unwrap_or_else(|_| format!("{}/api/auth/callback", app_url.trim_end_matches('/')));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            google_userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            admin_emails: parse_admin_emails(&var_or("ADMIN_EMAILS", "")),
            storage: StorageConfig {
                bucket: var_or("STORAGE_BUCKET", "techfest-uploads"),
                endpoint: var_or("STORAGE_ENDPOINT", "https://t3.storage.dev"),
                region: var_or("STORAGE_REGION", "auto"),
                access_key_id: var_or("STORAGE_ACCESS_KEY_ID", ""),
                secret_access_key: var_or("STORAGE_SECRET_ACCESS_KEY", ""),
                signed_url_ttl_seconds: parsed_or("SIGNED_URL_TTL_SECONDS", 600)?,
            },
            mail: MailConfig {
                from: var_or("MAIL_FROM", "Techfest <no-reply@techfest.local>"),
                smtp_host: optional("SMTP_HOST"),
                smtp_port: parsed_or("SMTP_PORT", 587)?,
                smtp_username: optional("SMTP_USERNAME"),
                smtp_password: optional("SMTP_PASSWORD"),
            },
            max_team_size: parsed_or("MAX_TEAM_SIZE", 4)?,
            app_url,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Splits a comma separated list, trimming and lowercasing each address.
pub fn parse_admin_emails(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Host that serves public object URLs, `<bucket>.<endpoint host>`.
pub fn public_host(bucket: &str, endpoint: &str) -> String {
    let host = endpoint
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    format!("{}.{}", bucket, host)
}
