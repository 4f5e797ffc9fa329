//! Error types for the billing admin server.
//!
//! Domain-specific errors (configuration, authorization, request parsing) are aggregated
//! into a single [`Error`] alongside library errors. Every error implements `IntoResponse`
//! so handlers can return `Result<impl IntoResponse, Error>` and propagate with `?`.

pub mod auth;
pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, request::RequestError},
};

/// Main error type for the billing admin server.
///
/// Not-found outcomes are never represented here: lookups return `Option` and deletions
/// return whether a row was removed.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Admin API access was denied.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A path or query parameter could not be parsed into its typed form.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Password hashing failed while creating an account.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Unparseable parameters or a reference to a record that does not exist
/// - 401 Unauthorized - Missing or wrong admin API token
/// - 409 Conflict - A unique value (meter number, username, email) is already taken
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "Rejected write violating a unique constraint");

                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto {
                            error: "A record with the same unique value already exists".to_string(),
                        }),
                    )
                        .into_response()
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "Rejected write violating a foreign key");

                    (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorDto {
                            error: "Referenced record does not exist".to_string(),
                        }),
                    )
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
