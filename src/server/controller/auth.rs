use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::SignUpRequest},
    server::{error::Error, model::app::AppState, service::auth::AuthService},
};

pub static AUTH_TAG: &str = "auth";

/// Create a user account
///
/// Responds with a plain text message.
#[utoipa::path(
    post,
    path = "/api/admin/createUser",
    tag = AUTH_TAG,
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User created", body = String, content_type = "text/plain"),
        (status = 400, description = "User could not be created", body = String, content_type = "text/plain"),
        (status = 406, description = "Email already registered", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    if auth_service.has_user_email(request.email.trim()).await? {
        tracing::debug!("Signup rejected for an already registered email");

        return Ok((
            StatusCode::NOT_ACCEPTABLE,
            "User already exists with this email",
        ));
    }

    match auth_service.signup_user(request).await? {
        Some(user) => {
            tracing::info!(user_id = user.id, "Created user account");

            Ok((StatusCode::CREATED, "User created successfully"))
        }
        None => Ok((StatusCode::BAD_REQUEST, "User not created")),
    }
}
