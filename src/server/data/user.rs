use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::UserModel;

/// Profile columns an administrator may change on an existing user
pub struct UserProfileParams {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already hashed password
    pub async fn create(
        &self,
        profile: UserProfileParams,
        password_hash: String,
    ) -> Result<UserModel, DbErr> {
        let user = entity::app_user::ActiveModel {
            username: ActiveValue::Set(profile.username),
            email: ActiveValue::Set(profile.email),
            password_hash: ActiveValue::Set(password_hash),
            first_name: ActiveValue::Set(profile.first_name),
            last_name: ActiveValue::Set(profile.last_name),
            phone_number: ActiveValue::Set(profile.phone_number),
            address: ActiveValue::Set(profile.address),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Overwrites the profile columns of an existing user, leaving the password untouched
    ///
    /// Returns `Ok(None)` if no user exists with the provided ID.
    pub async fn update_profile(
        &self,
        user_id: i32,
        profile: UserProfileParams,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.username = ActiveValue::Set(profile.username);
        user_am.email = ActiveValue::Set(profile.email);
        user_am.first_name = ActiveValue::Set(profile.first_name);
        user_am.last_name = ActiveValue::Set(profile.last_name);
        user_am.phone_number = ActiveValue::Set(profile.phone_number);
        user_am.address = ActiveValue::Set(profile.address);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Gets a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - The user
    /// - `Ok(None)` - No user exists with the provided ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets all users ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<UserModel>)` - All users
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::AppUser::find()
            .order_by_asc(entity::app_user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the users with the provided IDs, IDs without a user are skipped
    pub async fn get_many_by_ids(&self, user_ids: Vec<i32>) -> Result<Vec<UserModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await
    }

    /// Gets a user by exact username
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - The user
    /// - `Ok(None)` - No user has that username
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether any user already has `email`
    ///
    /// # Returns
    /// - `Ok(true)` - The email is taken
    /// - `Ok(false)` - The email is free
    /// - `Err(DbErr)` - Database operation failed
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any user already has `username`
    ///
    /// # Returns
    /// - `Ok(true)` - The username is taken
    /// - `Ok(false)` - The username is free
    /// - `Err(DbErr)` - Database operation failed
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a user, houses assigned to them become unassigned
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AppUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
