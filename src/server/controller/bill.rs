use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        bill::{BillDto, BillStatus, DateRangeParams},
    },
    server::{
        controller::util::date::parse_date,
        error::{request::RequestError, Error},
        model::app::AppState,
        service::bill::BillService,
    },
};

pub static BILL_TAG: &str = "bill";

/// Create a bill, or update the bill named by `id`
#[utoipa::path(
    post,
    path = "/api/admin/bills",
    tag = BILL_TAG,
    request_body = BillDto,
    responses(
        (status = 201, description = "Bill saved", body = BillDto),
        (status = 400, description = "House does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bill(
    State(state): State<AppState>,
    Json(bill): Json<BillDto>,
) -> Result<impl IntoResponse, Error> {
    let bill = BillService::new(&state.db).save_bill(bill).await?;

    Ok((StatusCode::CREATED, Json(bill)))
}

/// Get a bill by ID
#[utoipa::path(
    get,
    path = "/api/admin/bills/{billId}",
    tag = BILL_TAG,
    params(("billId" = i32, Path, description = "ID of the bill")),
    responses(
        (status = 200, description = "Bill found", body = BillDto),
        (status = 404, description = "Bill not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill_by_id(
    State(state): State<AppState>,
    Path(bill_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let bill_service = BillService::new(&state.db);

    match bill_service.get_bill_by_id(bill_id).await? {
        Some(bill) => Ok((StatusCode::OK, Json(bill)).into_response()),
        None => {
            tracing::debug!("Bill ID {} not found", bill_id);

            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// Get every bill
#[utoipa::path(
    get,
    path = "/api/admin/bills",
    tag = BILL_TAG,
    responses(
        (status = 200, description = "All bills ordered by ID", body = Vec<BillDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_bills(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let bills = BillService::new(&state.db).get_all_bills().await?;

    Ok((StatusCode::OK, Json(bills)))
}

/// Delete a bill
#[utoipa::path(
    delete,
    path = "/api/admin/bills/{billId}",
    tag = BILL_TAG,
    params(("billId" = i32, Path, description = "ID of the bill")),
    responses(
        (status = 204, description = "Bill deleted"),
        (status = 404, description = "Bill not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if BillService::new(&state.db).delete_bill(bill_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::debug!("Bill ID {} not found for deletion", bill_id);

        Ok(StatusCode::NOT_FOUND)
    }
}

/// Get bills with a status
#[utoipa::path(
    get,
    path = "/api/admin/bills/status/{status}",
    tag = BILL_TAG,
    params(("status" = BillStatus, Path, description = "PAID, UNPAID or OVERDUE")),
    responses(
        (status = 200, description = "Bills with the status", body = Vec<BillDto>),
        (status = 400, description = "Unrecognized status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let status: BillStatus = status.parse().map_err(RequestError::from)?;

    let bills = BillService::new(&state.db)
        .find_bills_by_status(status)
        .await?;

    Ok((StatusCode::OK, Json(bills)))
}

/// Get bills for a house
#[utoipa::path(
    get,
    path = "/api/admin/bills/house/{houseId}",
    tag = BILL_TAG,
    params(("houseId" = i32, Path, description = "ID of the house")),
    responses(
        (status = 200, description = "Bills for the house", body = Vec<BillDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills_by_house_id(
    State(state): State<AppState>,
    Path(house_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let bills = BillService::new(&state.db)
        .find_bills_by_house_id(house_id)
        .await?;

    Ok((StatusCode::OK, Json(bills)))
}

/// Get bills created within a date range, both ends included
#[utoipa::path(
    get,
    path = "/api/admin/bills/date-range",
    tag = BILL_TAG,
    params(DateRangeParams),
    responses(
        (status = 200, description = "Bills created within the range", body = Vec<BillDto>),
        (status = 400, description = "Missing or malformed date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills_by_date_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
) -> Result<impl IntoResponse, Error> {
    let start = parse_date("startDate", &range.start_date)?;
    let end = parse_date("endDate", &range.end_date)?;

    let bills = BillService::new(&state.db)
        .find_bills_by_date_range(start, end)
        .await?;

    Ok((StatusCode::OK, Json(bills)))
}

/// Get bills due on a date
#[utoipa::path(
    get,
    path = "/api/admin/bills/due-date/{dueDate}",
    tag = BILL_TAG,
    params(("dueDate" = String, Path, description = "Due date as YYYY-MM-DD")),
    responses(
        (status = 200, description = "Bills due on the date", body = Vec<BillDto>),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills_by_due_date(
    State(state): State<AppState>,
    Path(due_date): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let due_date = parse_date("dueDate", &due_date)?;

    let bills = BillService::new(&state.db)
        .find_bills_by_due_date(due_date)
        .await?;

    Ok((StatusCode::OK, Json(bills)))
}

/// Get bills paid on a date
#[utoipa::path(
    get,
    path = "/api/admin/bills/paid-date/{paidDate}",
    tag = BILL_TAG,
    params(("paidDate" = String, Path, description = "Payment date as YYYY-MM-DD")),
    responses(
        (status = 200, description = "Bills paid on the date", body = Vec<BillDto>),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills_by_paid_date(
    State(state): State<AppState>,
    Path(paid_date): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let paid_date = parse_date("paidDate", &paid_date)?;

    let bills = BillService::new(&state.db)
        .find_bills_by_paid_date(paid_date)
        .await?;

    Ok((StatusCode::OK, Json(bills)))
}
