use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static USER_TAG: &str = "user";

/// Update the profile of an existing user
///
/// Accounts are only created through signup, an unknown `id` is not created here.
#[utoipa::path(
    post,
    path = "/api/admin/users/updateUser",
    tag = USER_TAG,
    request_body = UserDto,
    responses(
        (status = 201, description = "User updated", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(user): Json<UserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = user.id;

    match UserService::new(&state.db).update_user(user).await? {
        Some(user) => Ok((StatusCode::CREATED, Json(user)).into_response()),
        None => {
            tracing::debug!("User ID {} not found for update", user_id);

            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/admin/users/{userId}",
    tag = USER_TAG,
    params(("userId" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    match UserService::new(&state.db).get_user_by_id(user_id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => {
            tracing::debug!("User ID {} not found", user_id);

            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// Get every user
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users ordered by ID", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Delete a user, unassigning their houses
#[utoipa::path(
    delete,
    path = "/api/admin/users/{userId}",
    tag = USER_TAG,
    params(("userId" = i32, Path, description = "ID of the user")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if UserService::new(&state.db).delete_user(user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::debug!("User ID {} not found for deletion", user_id);

        Ok(StatusCode::NOT_FOUND)
    }
}

/// Get a user by username
#[utoipa::path(
    get,
    path = "/api/admin/users/username/{username}",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Exact username")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    match UserService::new(&state.db).find_by_username(&username).await? {
        Some(user) => Ok((StatusCode::OK, Json(UserDto::from(user))).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
