use chrono::{Days, NaiveDate};
use entity::sea_orm_active_enums::BillStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn bill<'a>(&'a self) -> BillFixtures<'a> {
        BillFixtures { context: self }
    }
}

pub struct BillFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> BillFixtures<'a> {
    /// Insert a bill of 100 units totalling 25.0
    ///
    /// Due 30 days after `create_date`. `PAID` bills are paid 10 days after `create_date`,
    /// any other status leaves the paid date empty.
    pub async fn insert_bill(
        &self,
        house_id: i32,
        status: BillStatus,
        create_date: NaiveDate,
    ) -> Result<entity::bill::Model, TestError> {
        let due_date = create_date + Days::new(30);
        let paid_date = match status {
            BillStatus::Paid => Some(create_date + Days::new(10)),
            _ => None,
        };

        self.insert_bill_with_dates(house_id, status, create_date, due_date, paid_date)
            .await
    }

    pub async fn insert_bill_with_dates(
        &self,
        house_id: i32,
        status: BillStatus,
        create_date: NaiveDate,
        due_date: NaiveDate,
        paid_date: Option<NaiveDate>,
    ) -> Result<entity::bill::Model, TestError> {
        Ok(
            entity::prelude::Bill::insert(entity::bill::ActiveModel {
                house_id: ActiveValue::Set(house_id),
                status: ActiveValue::Set(status),
                used_unit: ActiveValue::Set(100.0),
                total: ActiveValue::Set(25.0),
                create_date: ActiveValue::Set(create_date),
                due_date: ActiveValue::Set(due_date),
                paid_date: ActiveValue::Set(paid_date),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
