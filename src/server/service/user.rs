//! User service for profile management and login.
//!
//! Profile edits are copied into every registrant snapshot the user owns, so the
//! participations, team memberships and join requests always show the current name,
//! phone and college.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserDto,
    server::{
        data::{participation::ParticipationRepository, team::TeamRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            auth::{GoogleUserInfo, Principal},
            user::{user_dto, UpdateProfileParams, UpsertUserParam},
        },
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or refreshes the user behind a Google login.
    ///
    /// Emails listed in `admin_emails` are granted admin. An account that was made
    /// admin earlier keeps the grant even when removed from the list.
    ///
    /// # Arguments
    /// - `info` - Profile returned by the userinfo endpoint
    /// - `admin_emails` - Lowercased emails granted admin on login
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored user
    /// - `Err(AppError::AuthErr)` - Google did not verify the email
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn sign_in(
        &self,
        info: GoogleUserInfo,
        admin_emails: &[String],
    ) -> Result<entity::user::Model, AppError> {
        if !info.email_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        let email = info.email.trim().to_lowercase();
        let name = info
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or("Participant").to_string());

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                grant_admin: admin_emails.contains(&email),
                email,
                name,
                image: info.picture,
            })
            .await?;

        Ok(user)
    }

    pub async fn get_current(&self, principal: &Principal) -> Result<UserDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(principal.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(principal.user_id))?;

        Ok(user_dto(user))
    }

    /// Updates the caller's profile and every snapshot copied from it, in one
    /// transaction.
    ///
    /// A cleared phone or college is removed from the profile but leaves the value
    /// already recorded on registrations untouched. Running the same update twice
    /// leaves the data unchanged.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated profile
    /// - `Err(AppError::AuthErr)` - The user no longer exists
    /// - `Err(AppError::DbErr)` - Database error, nothing is written
    pub async fn update_profile(
        &self,
        principal: &Principal,
        params: UpdateProfileParams,
    ) -> Result<UserDto, AppError> {
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .update_profile(principal.user_id, &params)
            .await?
            .ok_or(AuthError::UserNotInDatabase(principal.user_id))?;

        ParticipationRepository::new(&txn)
            .sync_snapshot(
                user.id,
                &params.name,
                params.phone.as_deref(),
                params.college.as_deref(),
            )
            .await?;
        TeamRepository::new(&txn)
            .sync_snapshot(
                user.id,
                &params.name,
                params.phone.as_deref(),
                params.college.as_deref(),
            )
            .await?;

        txn.commit().await?;

        Ok(user_dto(user))
    }
}
