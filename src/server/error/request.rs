//! Errors for path and query parameters that fail to parse into their typed form.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, bill::UnknownBillStatus};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    InvalidBillStatus(#[from] UnknownBillStatus),
    #[error("Invalid date for {field}: {value:?}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
}

/// Always a 400 Bad Request; the message tells the caller which parameter was wrong.
impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request parameter: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
