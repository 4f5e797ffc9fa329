//! Account signup.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{SignUpRequest, UserDto},
    server::{
        data::user::{UserProfileParams, UserRepository},
        error::Error,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether an account is already registered with the provided email.
    pub async fn has_user_email(&self, email: &str) -> Result<bool, Error> {
        let exists = UserRepository::new(self.db).email_exists(email).await?;

        Ok(exists)
    }

    /// Creates a new account with an Argon2 hash of the requested password.
    ///
    /// Checking the email beforehand with [`Self::has_user_email`] is the caller's job. The
    /// unique index on email still rejects a concurrent signup that slips past that check.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Account created
    /// - `Ok(None)` - Email, username or password is blank, the username is taken, or another
    ///   signup claimed the same email or username first
    /// - `Err(Error::PasswordHashError)` - Password could not be hashed
    /// - `Err(Error::DbErr)` - Other database failure
    pub async fn signup_user(&self, request: SignUpRequest) -> Result<Option<UserDto>, Error> {
        let email = request.email.trim().to_string();
        let username = request.username.trim().to_string();

        if email.is_empty() || username.is_empty() || request.password.is_empty() {
            tracing::debug!("Rejected signup with a blank required field");

            return Ok(None);
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(&username).await? {
            tracing::debug!(username = %username, "Rejected signup for a taken username");

            return Ok(None);
        }

        let password_hash = hash_password(request.password).await?;

        let profile = UserProfileParams {
            username,
            email,
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
            address: request.address,
        };

        match user_repo.create(profile, password_hash).await {
            Ok(user) => Ok(Some(user.into())),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "Signup lost a race for a unique value");

                    Ok(None)
                }
                _ => Err(err.into()),
            },
        }
    }
}

/// Hashes a password into a PHC string on the blocking thread pool.
async fn hash_password(password: String) -> Result<String, Error> {
    let hashed = tokio::task::spawn_blocking(move || {
        let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    hashed.map_err(|e| Error::PasswordHashError(e.to_string()))
}
