use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, house::HouseDto},
    server::{error::Error, model::app::AppState, service::house::HouseService},
};

pub static HOUSE_TAG: &str = "house";

/// Create a house, or update the house named by `id`
#[utoipa::path(
    post,
    path = "/api/admin/houses",
    tag = HOUSE_TAG,
    request_body = HouseDto,
    responses(
        (status = 201, description = "House saved", body = HouseDto),
        (status = 400, description = "Assigned user does not exist", body = ErrorDto),
        (status = 409, description = "Meter number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_house(
    State(state): State<AppState>,
    Json(house): Json<HouseDto>,
) -> Result<impl IntoResponse, Error> {
    let house_service = HouseService::new(&state.db);

    let house = house_service.save_house(house).await?;

    Ok((StatusCode::CREATED, Json(house)))
}

/// Get a house by ID
#[utoipa::path(
    get,
    path = "/api/admin/houses/{houseId}",
    tag = HOUSE_TAG,
    params(("houseId" = i32, Path, description = "ID of the house")),
    responses(
        (status = 200, description = "House found", body = HouseDto),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_house_by_id(
    State(state): State<AppState>,
    Path(house_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let house_service = HouseService::new(&state.db);

    match house_service.get_house_by_id(house_id).await? {
        Some(house) => Ok((StatusCode::OK, Json(house)).into_response()),
        None => {
            tracing::debug!("House ID {} not found", house_id);

            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// Get every house
#[utoipa::path(
    get,
    path = "/api/admin/houses",
    tag = HOUSE_TAG,
    responses(
        (status = 200, description = "All houses ordered by ID", body = Vec<HouseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_houses(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let houses = HouseService::new(&state.db).get_all_houses().await?;

    Ok((StatusCode::OK, Json(houses)))
}

/// Delete a house together with its bills
#[utoipa::path(
    delete,
    path = "/api/admin/houses/{houseId}",
    tag = HOUSE_TAG,
    params(("houseId" = i32, Path, description = "ID of the house")),
    responses(
        (status = 204, description = "House deleted"),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_house(
    State(state): State<AppState>,
    Path(house_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let house_service = HouseService::new(&state.db);

    if house_service.delete_house(house_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::debug!("House ID {} not found for deletion", house_id);

        Ok(StatusCode::NOT_FOUND)
    }
}

/// Get the house fitted with a meter
#[utoipa::path(
    get,
    path = "/api/admin/houses/meter-number/{meterNumber}",
    tag = HOUSE_TAG,
    params(("meterNumber" = String, Path, description = "Meter number of the house")),
    responses(
        (status = 200, description = "House found", body = HouseDto),
        (status = 404, description = "No house has this meter number"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_house_by_meter_number(
    State(state): State<AppState>,
    Path(meter_number): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let house_service = HouseService::new(&state.db);

    match house_service.find_house_by_meter_number(&meter_number).await? {
        Some(house) => Ok((StatusCode::OK, Json(house)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Get houses in a city
#[utoipa::path(
    get,
    path = "/api/admin/houses/city/{city}",
    tag = HOUSE_TAG,
    params(("city" = String, Path, description = "Exact city name")),
    responses(
        (status = 200, description = "Houses in the city", body = Vec<HouseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_houses_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let houses = HouseService::new(&state.db)
        .find_houses_by_city(&city)
        .await?;

    Ok((StatusCode::OK, Json(houses)))
}

/// Get houses in a state
#[utoipa::path(
    get,
    path = "/api/admin/houses/state/{state}",
    tag = HOUSE_TAG,
    params(("state" = String, Path, description = "Exact state name or code")),
    responses(
        (status = 200, description = "Houses in the state", body = Vec<HouseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_houses_by_state(
    State(app_state): State<AppState>,
    Path(state): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let houses = HouseService::new(&app_state.db)
        .find_houses_by_state(&state)
        .await?;

    Ok((StatusCode::OK, Json(houses)))
}

/// Get houses assigned to a user
#[utoipa::path(
    get,
    path = "/api/admin/houses/user/{userId}",
    tag = HOUSE_TAG,
    params(("userId" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Houses assigned to the user", body = Vec<HouseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_houses_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let houses = HouseService::new(&state.db)
        .find_houses_by_user_id(user_id)
        .await?;

    Ok((StatusCode::OK, Json(houses)))
}

/// Get houses by owner name
#[utoipa::path(
    get,
    path = "/api/admin/owner/{ownerName}",
    tag = HOUSE_TAG,
    params(("ownerName" = String, Path, description = "Exact owner name")),
    responses(
        (status = 200, description = "Houses with this owner name", body = Vec<HouseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_houses_by_owner_name(
    State(state): State<AppState>,
    Path(owner_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let houses = HouseService::new(&state.db)
        .find_by_owner_name(&owner_name)
        .await?;

    Ok((StatusCode::OK, Json(houses)))
}
