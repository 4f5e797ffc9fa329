use chrono::NaiveDate;
use entity::sea_orm_active_enums::BillStatus as BillStatusColumn;
use sea_orm::DatabaseConnection;

use crate::{
    model::bill::{BillDto, BillStatus},
    server::{
        data::bill::{BillParams, BillRepository},
        error::Error,
        model::db::BillModel,
    },
};

impl From<BillStatusColumn> for BillStatus {
    fn from(status: BillStatusColumn) -> Self {
        match status {
            BillStatusColumn::Paid => Self::Paid,
            BillStatusColumn::Unpaid => Self::Unpaid,
            BillStatusColumn::Overdue => Self::Overdue,
        }
    }
}

impl From<BillStatus> for BillStatusColumn {
    fn from(status: BillStatus) -> Self {
        match status {
            BillStatus::Paid => Self::Paid,
            BillStatus::Unpaid => Self::Unpaid,
            BillStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<BillModel> for BillDto {
    fn from(bill: BillModel) -> Self {
        Self {
            id: Some(bill.id),
            house_id: bill.house_id,
            status: bill.status.into(),
            used_unit: bill.used_unit,
            total: bill.total,
            create_date: bill.create_date,
            due_date: bill.due_date,
            paid_date: bill.paid_date,
        }
    }
}

/// Service for managing bills.
pub struct BillService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillService<'a> {
    /// Creates a new instance of [`BillService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a bill, or updates it when `bill.id` names an existing bill.
    ///
    /// Follows the same rules as [`HouseService::save_house`](super::house::HouseService::save_house),
    /// an unknown ID results in a new bill.
    ///
    /// # Returns
    /// - `Ok(BillDto)` - The stored bill including its ID
    /// - `Err(Error::DbErr)` - House does not exist or other database failure
    pub async fn save_bill(&self, bill: BillDto) -> Result<BillDto, Error> {
        let bill_repo = BillRepository::new(self.db);

        let bill_id = bill.id;
        let params = BillParams {
            house_id: bill.house_id,
            status: bill.status.into(),
            used_unit: bill.used_unit,
            total: bill.total,
            create_date: bill.create_date,
            due_date: bill.due_date,
            paid_date: bill.paid_date,
        };

        let existing = match bill_id {
            Some(bill_id) => bill_repo.update(bill_id, params.clone()).await?,
            None => None,
        };

        let saved = match existing {
            Some(bill) => bill,
            None => bill_repo.create(params).await?,
        };

        Ok(saved.into())
    }

    /// Gets a bill by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(BillDto))` - The bill
    /// - `Ok(None)` - No bill exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_bill_by_id(&self, bill_id: i32) -> Result<Option<BillDto>, Error> {
        let bill = BillRepository::new(self.db).get_by_id(bill_id).await?;

        Ok(bill.map(BillDto::from))
    }

    /// Gets every bill, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<BillDto>)` - All bills, empty if none are stored
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_all_bills(&self) -> Result<Vec<BillDto>, Error> {
        let bills = BillRepository::new(self.db).get_all().await?;

        Ok(into_dtos(bills))
    }

    /// Deletes a bill, returning `false` if no bill exists with the provided ID.
    pub async fn delete_bill(&self, bill_id: i32) -> Result<bool, Error> {
        let result = BillRepository::new(self.db).delete(bill_id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds bills in the provided status.
    ///
    /// # Returns
    /// - `Ok(Vec<BillDto>)` - Matching bills, empty if none match
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_bills_by_status(&self, status: BillStatus) -> Result<Vec<BillDto>, Error> {
        let bills = BillRepository::new(self.db)
            .get_many_by_status(status.into())
            .await?;

        Ok(into_dtos(bills))
    }

    /// Finds bills issued for a house.
    ///
    /// # Arguments
    /// - `house_id` - ID of the billed house, an unknown ID simply matches nothing
    ///
    /// # Returns
    /// - `Ok(Vec<BillDto>)` - The house's bills, empty if none
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_bills_by_house_id(&self, house_id: i32) -> Result<Vec<BillDto>, Error> {
        let bills = BillRepository::new(self.db)
            .get_many_by_house_id(house_id)
            .await?;

        Ok(into_dtos(bills))
    }

    /// Finds bills created between `start` and `end`, both dates included.
    ///
    /// A range where `start` is after `end` matches nothing.
    pub async fn find_bills_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<BillDto>, Error> {
        if start > end {
            return Ok(Vec::new());
        }

        let bills = BillRepository::new(self.db)
            .get_many_by_create_date_range(start, end)
            .await?;

        Ok(into_dtos(bills))
    }

    /// Finds bills due on `due_date`.
    ///
    /// # Returns
    /// - `Ok(Vec<BillDto>)` - Matching bills, empty if none match
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_bills_by_due_date(&self, due_date: NaiveDate) -> Result<Vec<BillDto>, Error> {
        let bills = BillRepository::new(self.db)
            .get_many_by_due_date(due_date)
            .await?;

        Ok(into_dtos(bills))
    }

    /// Finds bills paid on `paid_date`. Unpaid bills never match.
    ///
    /// # Returns
    /// - `Ok(Vec<BillDto>)` - Matching bills, empty if none match
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_bills_by_paid_date(
        &self,
        paid_date: NaiveDate,
    ) -> Result<Vec<BillDto>, Error> {
        let bills = BillRepository::new(self.db)
            .get_many_by_paid_date(paid_date)
            .await?;

        Ok(into_dtos(bills))
    }
}

fn into_dtos(bills: Vec<BillModel>) -> Vec<BillDto> {
    bills.into_iter().map(BillDto::from).collect()
}
