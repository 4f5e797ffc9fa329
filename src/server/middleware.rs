use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use constant_time_eq::constant_time_eq;

use crate::server::{controller::ADMIN_PATH, error::auth::AuthError};

/// Rejects admin API requests that do not carry `Authorization: Bearer <token>`.
///
/// Requests outside the admin prefix, such as Swagger UI, pass through untouched.
pub async fn require_admin_token(
    State(token): State<Arc<str>>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if !request.uri().path().starts_with(ADMIN_PATH) {
        return Ok(next.run(request).await);
    }

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match provided {
        Some(provided) if constant_time_eq(provided.as_bytes(), token.as_bytes()) => {
            Ok(next.run(request).await)
        }
        _ => Err(AuthError::Unauthorized),
    }
}
