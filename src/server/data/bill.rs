use chrono::NaiveDate;
use entity::sea_orm_active_enums::BillStatus;
use sea_orm::{
    sea_query::IntoCondition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{BillModel, HouseModel};

/// Column values for inserting or overwriting a bill
#[derive(Clone)]
pub struct BillParams {
    pub house_id: i32,
    pub status: BillStatus,
    pub used_unit: f64,
    pub total: f64,
    pub create_date: NaiveDate,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

pub struct BillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BillRepository<'a, C> {
    /// Creates a new instance of [`BillRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new bill
    pub async fn create(&self, params: BillParams) -> Result<BillModel, DbErr> {
        let bill = entity::bill::ActiveModel {
            house_id: ActiveValue::Set(params.house_id),
            status: ActiveValue::Set(params.status),
            used_unit: ActiveValue::Set(params.used_unit),
            total: ActiveValue::Set(params.total),
            create_date: ActiveValue::Set(params.create_date),
            due_date: ActiveValue::Set(params.due_date),
            paid_date: ActiveValue::Set(params.paid_date),
            ..Default::default()
        };

        bill.insert(self.db).await
    }

    /// Overwrites every column of an existing bill
    ///
    /// Returns `Ok(None)` if no bill exists with the provided ID.
    pub async fn update(
        &self,
        bill_id: i32,
        params: BillParams,
    ) -> Result<Option<BillModel>, DbErr> {
        let bill = match entity::prelude::Bill::find_by_id(bill_id)
            .one(self.db)
            .await?
        {
            Some(bill) => bill,
            None => return Ok(None),
        };

        let mut bill_am = bill.into_active_model();
        bill_am.house_id = ActiveValue::Set(params.house_id);
        bill_am.status = ActiveValue::Set(params.status);
        bill_am.used_unit = ActiveValue::Set(params.used_unit);
        bill_am.total = ActiveValue::Set(params.total);
        bill_am.create_date = ActiveValue::Set(params.create_date);
        bill_am.due_date = ActiveValue::Set(params.due_date);
        bill_am.paid_date = ActiveValue::Set(params.paid_date);

        let bill = bill_am.update(self.db).await?;

        Ok(Some(bill))
    }

    /// Gets a bill by ID
    ///
    /// # Returns
    /// - `Ok(Some(BillModel))` - The bill
    /// - `Ok(None)` - No bill exists with the provided ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_by_id(&self, bill_id: i32) -> Result<Option<BillModel>, DbErr> {
        entity::prelude::Bill::find_by_id(bill_id).one(self.db).await
    }

    /// Gets all bills ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<BillModel>)` - All bills
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_all(&self) -> Result<Vec<BillModel>, DbErr> {
        entity::prelude::Bill::find()
            .order_by_asc(entity::bill::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every bill together with the house it belongs to
    ///
    /// The house is always present given the foreign key, it is an `Option` only because
    /// of how SeaORM models the join.
    pub async fn get_all_with_house(
        &self,
    ) -> Result<Vec<(BillModel, Option<HouseModel>)>, DbErr> {
        entity::prelude::Bill::find()
            .find_also_related(entity::house::Entity)
            .order_by_asc(entity::bill::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets bills in a status
    ///
    /// # Returns
    /// - `Ok(Vec<BillModel>)` - Matching bills ordered by ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_many_by_status(&self, status: BillStatus) -> Result<Vec<BillModel>, DbErr> {
        self.get_many_by(entity::bill::Column::Status.eq(status))
            .await
    }

    /// Gets bills issued for a house
    ///
    /// # Returns
    /// - `Ok(Vec<BillModel>)` - Matching bills ordered by ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_many_by_house_id(&self, house_id: i32) -> Result<Vec<BillModel>, DbErr> {
        self.get_many_by(entity::bill::Column::HouseId.eq(house_id))
            .await
    }

    /// Gets bills created between `start` and `end`, both dates included
    pub async fn get_many_by_create_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<BillModel>, DbErr> {
        self.get_many_by(entity::bill::Column::CreateDate.between(start, end))
            .await
    }

    /// Gets bills due on a date
    ///
    /// # Returns
    /// - `Ok(Vec<BillModel>)` - Matching bills ordered by ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_many_by_due_date(&self, due_date: NaiveDate) -> Result<Vec<BillModel>, DbErr> {
        self.get_many_by(entity::bill::Column::DueDate.eq(due_date))
            .await
    }

    /// Gets bills paid on a date, bills without a paid date never match
    ///
    /// # Returns
    /// - `Ok(Vec<BillModel>)` - Matching bills ordered by ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_many_by_paid_date(
        &self,
        paid_date: NaiveDate,
    ) -> Result<Vec<BillModel>, DbErr> {
        self.get_many_by(entity::bill::Column::PaidDate.eq(paid_date))
            .await
    }

    /// Deletes a bill
    ///
    /// Returns OK regardless of bill existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, bill_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Bill::delete_by_id(bill_id)
            .exec(self.db)
            .await
    }

    async fn get_many_by<F: IntoCondition>(&self, condition: F) -> Result<Vec<BillModel>, DbErr> {
        entity::prelude::Bill::find()
            .filter(condition)
            .order_by_asc(entity::bill::Column::Id)
            .all(self.db)
            .await
    }
}
