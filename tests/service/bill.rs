use billing_admin::{
    model::bill::{BillDto, BillStatus as BillStatusDto},
    server::service::bill::BillService,
};

use super::*;

/// Expect an existing bill to be overwritten when saved with its ID
#[tokio::test]
async fn save_with_existing_id_updates_bill() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let house = test.house().insert_house("M-001", None).await?;
    let existing = test
        .bill()
        .insert_bill(house.id, BillStatus::Unpaid, factory::date(2025, 1, 1))
        .await?;

    let bill_service = BillService::new(&test.db);
    let saved = bill_service
        .save_bill(BillDto {
            id: Some(existing.id),
            house_id: house.id,
            status: BillStatusDto::Paid,
            used_unit: existing.used_unit,
            total: existing.total,
            create_date: existing.create_date,
            due_date: existing.due_date,
            paid_date: Some(factory::date(2025, 1, 5)),
        })
        .await
        .unwrap();

    assert_eq!(saved.id, Some(existing.id));
    assert_eq!(saved.status, BillStatusDto::Paid);

    let paid = bill_service
        .find_bills_by_status(BillStatusDto::Paid)
        .await
        .unwrap();
    assert_eq!(paid.len(), 1);
    assert!(bill_service
        .find_bills_by_status(BillStatusDto::Unpaid)
        .await
        .unwrap()
        .is_empty());

    Ok(())
}

/// Expect a single day range to match bills created on that day
#[tokio::test]
async fn single_day_range_matches_that_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let house = test.house().insert_house("M-001", None).await?;
    for day in [9, 10, 11] {
        test.bill()
            .insert_bill(house.id, BillStatus::Unpaid, factory::date(2025, 1, day))
            .await?;
    }

    let day = factory::date(2025, 1, 10);
    let bills = BillService::new(&test.db)
        .find_bills_by_date_range(day, day)
        .await
        .unwrap();

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].create_date, day);

    Ok(())
}

/// Expect a database error rather than an empty result when the table is missing
#[tokio::test]
async fn errors_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = BillService::new(&test.db).get_all_bills().await;

    assert!(result.is_err());

    Ok(())
}
