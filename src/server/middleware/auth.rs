use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::auth::Principal,
};

pub enum Permission {
    Admin,
}

/// Resolves the session into a `Principal` once per request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged in user and checks the given permissions.
    ///
    /// # Returns
    /// - `Ok(Principal)` - The authenticated caller
    /// - `Err(AuthError::AuthenticationRequired)` - No user in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AdminRequired)` - `Permission::Admin` requested by a non-admin
    pub async fn require(&self, permissions: &[Permission]) -> Result<Principal, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::AuthenticationRequired.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let principal = Principal::from_entity(&user);
        for permission in permissions {
            match permission {
                Permission::Admin => principal.require_admin()?,
            }
        }

        Ok(principal)
    }

    /// Like `require(&[])`, but an anonymous caller is `Ok(None)`.
    pub async fn optional(&self) -> Result<Option<Principal>, AppError> {
        match self.require(&[]).await {
            Ok(principal) => Ok(Some(principal)),
            Err(AppError::AuthErr(AuthError::AuthenticationRequired))
            | Err(AppError::AuthErr(AuthError::UserNotInDatabase(_))) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
