use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, report::ReportDto},
    server::{error::Error, model::app::AppState, service::report::ReportService},
};

pub static REPORT_TAG: &str = "report";

/// Get every bill flattened with its house and owner username
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "One report row per bill ordered by bill ID", body = Vec<ReportDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_reports(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reports = ReportService::new(&state.db).get_all_reports().await?;

    Ok((StatusCode::OK, Json(reports)))
}
