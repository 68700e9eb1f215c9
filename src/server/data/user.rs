//! User data repository for database operations.
//!
//! Users are keyed by email; Google login upserts them and profile edits update the
//! editable columns.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::user::{UpdateProfileParams, UpsertUserParam};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a user by email.
    ///
    /// Name and image are refreshed on every login. Admin is only written when
    /// `grant_admin` is set, so logging in never revokes an existing grant.
    ///
    /// # Arguments
    /// - `param` - Email, display name, avatar and whether to grant admin
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, DbErr> {
        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::Image,
            entity::user::Column::UpdatedAt,
        ];
        if param.grant_admin {
            update_columns.push(entity::user::Column::Admin);
        }

        let now = Utc::now();
        entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            image: ActiveValue::Set(param.image),
            admin: ActiveValue::Set(param.grant_admin),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Updates the editable profile columns.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        params: &UpdateProfileParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = user.into_active_model();
        active.name = ActiveValue::Set(params.name.clone());
        active.phone = ActiveValue::Set(params.phone.clone());
        active.college = ActiveValue::Set(params.college.clone());
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }
}
