use billing_admin::{model::house::HouseDto, server::service::house::HouseService};
use sea_orm::EntityTrait;

use super::*;

fn house(id: Option<i32>, meter_number: &str) -> HouseDto {
    HouseDto {
        id,
        owner_name: "Alice".to_string(),
        meter_number: meter_number.to_string(),
        city: "Austin".to_string(),
        state: "TX".to_string(),
        user_id: None,
    }
}

/// Expect an unknown ID to be ignored and a new house created with a fresh ID
#[tokio::test]
async fn save_with_unknown_id_creates_house() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let existing = test.house().insert_house("M-001", None).await?;

    let house_service = HouseService::new(&test.db);
    let saved = house_service
        .save_house(house(Some(existing.id + 100), "M-002"))
        .await
        .unwrap();

    assert!(saved.id.is_some());
    assert_ne!(saved.id, Some(existing.id + 100));
    assert_eq!(house_service.get_all_houses().await.unwrap().len(), 2);

    Ok(())
}

/// Expect deleting a house to also remove its bills
#[tokio::test]
async fn delete_removes_bills() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let existing = test.house().insert_house("M-001", None).await?;
    test.bill()
        .insert_bill(existing.id, BillStatus::Unpaid, factory::date(2025, 1, 1))
        .await?;

    let house_service = HouseService::new(&test.db);
    let deleted = house_service.delete_house(existing.id).await.unwrap();
    assert!(deleted);

    let bills = entity::prelude::Bill::find().all(&test.db).await?;
    assert!(bills.is_empty());

    Ok(())
}

/// Expect Ok(false) when deleting a house that does not exist
#[tokio::test]
async fn delete_unknown_house_returns_false() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let deleted = HouseService::new(&test.db).delete_house(1).await.unwrap();

    assert!(!deleted);

    Ok(())
}
