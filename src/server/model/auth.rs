use serde::Deserialize;

use crate::server::error::auth::AuthError;

/// The authenticated caller, resolved once per request by `AuthGuard` and passed to
/// every service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub email: String,
    pub admin: bool,
}

impl Principal {
    pub fn from_entity(user: &entity::user::Model) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            admin: user.admin,
        }
    }

    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.admin {
            Ok(())
        } else {
            Err(AuthError::AdminRequired(self.user_id))
        }
    }

    /// Owner of the resource or an admin.
    pub fn require_owner_or_admin(&self, owner_id: i32, resource: &str) -> Result<(), AuthError> {
        if self.admin || self.user_id == owner_id {
            Ok(())
        } else {
            Err(AuthError::AccessDenied(
                self.user_id,
                format!("not the owner of {}", resource),
            ))
        }
    }
}

/// Profile returned by Google's OpenID Connect userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    pub name: Option<String>,
    pub picture: Option<String>,
}
