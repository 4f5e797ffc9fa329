//! Tests for the house endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use billing_admin::{
    model::house::HouseDto,
    server::controller::house::{
        create_house, delete_house, get_all_houses, get_house_by_id, get_house_by_meter_number,
        get_houses_by_city, get_houses_by_owner_name, get_houses_by_state, get_houses_by_user_id,
    },
};

use super::*;

fn new_house(meter_number: &str) -> HouseDto {
    HouseDto {
        id: None,
        owner_name: "Alice".to_string(),
        meter_number: meter_number.to_string(),
        city: "Austin".to_string(),
        state: "TX".to_string(),
        user_id: None,
    }
}

/// Expect 201 Created echoing the submitted fields with an assigned ID
#[tokio::test]
async fn creates_house() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let result = create_house(State(test.to_app_state()), Json(new_house("M-001"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let house: HouseDto = body_json(resp).await;
    assert!(house.id.is_some());
    assert_eq!(house.owner_name, "Alice");
    assert_eq!(house.meter_number, "M-001");
    assert_eq!(house.city, "Austin");
    assert_eq!(house.state, "TX");
    assert_eq!(house.user_id, None);

    Ok(())
}

/// Expect an existing house to be updated in place when its ID is provided
#[tokio::test]
async fn updates_existing_house() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let existing = test.house().insert_house("M-001", None).await?;

    let mut house = new_house("M-001");
    house.id = Some(existing.id);
    house.city = "Dallas".to_string();

    let resp = create_house(State(test.to_app_state()), Json(house))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let saved: HouseDto = body_json(resp).await;
    assert_eq!(saved.id, Some(existing.id));
    assert_eq!(saved.city, "Dallas");

    let all = get_all_houses(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();
    let houses: Vec<HouseDto> = body_json(all).await;
    assert_eq!(houses.len(), 1);

    Ok(())
}

/// Expect 409 Conflict when the meter number is already used by another house
#[tokio::test]
async fn conflict_for_duplicate_meter_number() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    test.house().insert_house("M-001", None).await?;

    let result = create_house(State(test.to_app_state()), Json(new_house("M-001"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 Bad Request when assigning the house to a user that does not exist
#[tokio::test]
async fn bad_request_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let mut house = new_house("M-001");
    house.user_id = Some(42);

    let result = create_house(State(test.to_app_state()), Json(house)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK with the house for an existing ID
#[tokio::test]
async fn gets_house_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let existing = test.house().insert_house("M-001", None).await?;

    let resp = get_house_by_id(State(test.to_app_state()), Path(existing.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let house: HouseDto = body_json(resp).await;
    assert_eq!(house.id, Some(existing.id));
    assert_eq!(house.meter_number, "M-001");

    Ok(())
}

/// Expect 404 Not Found with an empty body for an unknown ID
#[tokio::test]
async fn not_found_for_unknown_house_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let resp = get_house_by_id(State(test.to_app_state()), Path(999))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());

    Ok(())
}

/// Expect an empty list when no houses exist
#[tokio::test]
async fn gets_empty_house_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let resp = get_all_houses(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let houses: Vec<HouseDto> = body_json(resp).await;
    assert!(houses.is_empty());

    Ok(())
}

/// Expect a list containing every stored house
#[tokio::test]
async fn gets_all_houses() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    for meter_number in ["M-001", "M-002", "M-003"] {
        test.house().insert_house(meter_number, None).await?;
    }

    let resp = get_all_houses(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let houses: Vec<HouseDto> = body_json(resp).await;
    assert_eq!(houses.len(), 3);

    Ok(())
}

/// Expect 204 No Content when deleting an existing house, and the house to be gone
#[tokio::test]
async fn deletes_house() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let existing = test.house().insert_house("M-001", None).await?;

    let resp = delete_house(State(test.to_app_state()), Path(existing.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_house_by_id(State(test.to_app_state()), Path(existing.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found when deleting an unknown house
#[tokio::test]
async fn not_found_deleting_unknown_house() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let resp = delete_house(State(test.to_app_state()), Path(999))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());

    Ok(())
}

/// Expect 500 Internal Server Error rather than 404 when the database fails during deletion
#[tokio::test]
async fn error_deleting_house_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = delete_house(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 OK for a known meter number
#[tokio::test]
async fn gets_house_by_meter_number() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let existing = test.house().insert_house("M-001", None).await?;

    let resp = get_house_by_meter_number(State(test.to_app_state()), Path("M-001".to_string()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let house: HouseDto = body_json(resp).await;
    assert_eq!(house.id, Some(existing.id));

    Ok(())
}

/// Expect 404 Not Found with an empty body for an unknown meter number
#[tokio::test]
async fn not_found_for_unknown_meter_number() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    test.house().insert_house("M-001", None).await?;

    let resp = get_house_by_meter_number(State(test.to_app_state()), Path("UNKNOWN".to_string()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());

    Ok(())
}

/// Expect the city, state, user and owner filters to return only matching houses
#[tokio::test]
async fn filters_houses() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let user = test.user().insert_user("alice").await?;
    test.house()
        .insert_house_with_details("Alice", "M-001", "Austin", "TX", Some(user.id))
        .await?;
    test.house()
        .insert_house_with_details("Bob", "M-002", "Austin", "TX", None)
        .await?;
    test.house()
        .insert_house_with_details("Alice", "M-003", "Denver", "CO", None)
        .await?;

    let resp = get_houses_by_city(State(test.to_app_state()), Path("Austin".to_string()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let houses: Vec<HouseDto> = body_json(resp).await;
    assert_eq!(houses.len(), 2);

    let resp = get_houses_by_state(State(test.to_app_state()), Path("CO".to_string()))
        .await
        .unwrap()
        .into_response();
    let houses: Vec<HouseDto> = body_json(resp).await;
    assert_eq!(houses.len(), 1);
    assert_eq!(houses[0].meter_number, "M-003");

    let resp = get_houses_by_user_id(State(test.to_app_state()), Path(user.id))
        .await
        .unwrap()
        .into_response();
    let houses: Vec<HouseDto> = body_json(resp).await;
    assert_eq!(houses.len(), 1);
    assert_eq!(houses[0].meter_number, "M-001");

    let resp = get_houses_by_owner_name(State(test.to_app_state()), Path("Alice".to_string()))
        .await
        .unwrap()
        .into_response();
    let houses: Vec<HouseDto> = body_json(resp).await;
    assert_eq!(houses.len(), 2);

    let resp = get_houses_by_city(State(test.to_app_state()), Path("Boston".to_string()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let houses: Vec<HouseDto> = body_json(resp).await;
    assert!(houses.is_empty());

    Ok(())
}
