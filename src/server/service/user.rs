use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::{UserProfileParams, UserRepository},
        error::Error,
        model::db::UserModel,
    },
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            address: user.address,
        }
    }
}

/// Service for managing user accounts.
///
/// Accounts are created through [`AuthService`](super::auth::AuthService), this service
/// only reads, edits and removes them.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Overwrites the profile of an existing user.
    ///
    /// Username and email are trimmed the same way signup stores them. The stored
    /// password hash is never changed here.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The updated user
    /// - `Ok(None)` - No user exists with `user.id`
    /// - `Err(Error::DbErr)` - Username or email already taken, or other database failure
    pub async fn update_user(&self, user: UserDto) -> Result<Option<UserDto>, Error> {
        let profile = UserProfileParams {
            username: user.username.trim().to_string(),
            email: user.email.trim().to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            address: user.address,
        };

        let updated = UserRepository::new(self.db)
            .update_profile(user.id, profile)
            .await?;

        Ok(updated.map(UserDto::from))
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The user, without the password hash
    /// - `Ok(None)` - No user exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_by_id(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Gets every user, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - All users, empty if none are stored
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Deletes a user, returning `false` if no user exists with the provided ID.
    ///
    /// Houses assigned to the user are kept and become unassigned.
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds the stored user record for a username, including its password hash.
    ///
    /// Callers exposing the result over HTTP must convert it with [`UserDto::from`].
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, Error> {
        let user = UserRepository::new(self.db)
            .get_by_username(username)
            .await?;

        Ok(user)
    }
}
