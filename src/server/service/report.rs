use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::report::ReportDto,
    server::{
        data::{bill::BillRepository, user::UserRepository},
        error::Error,
    },
};

/// Service assembling the flattened bill report.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds one report row per bill, ordered by bill ID.
    ///
    /// Each row carries the username of the user the bill's house is assigned to, or an
    /// empty string for unassigned houses.
    pub async fn get_all_reports(&self) -> Result<Vec<ReportDto>, Error> {
        let bills = BillRepository::new(self.db).get_all_with_house().await?;

        let mut user_ids: Vec<i32> = bills
            .iter()
            .filter_map(|(_, house)| house.as_ref().and_then(|house| house.user_id))
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let usernames: HashMap<i32, String> = UserRepository::new(self.db)
            .get_many_by_ids(user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        let reports = bills
            .into_iter()
            .map(|(bill, house)| {
                let username = house
                    .as_ref()
                    .and_then(|house| house.user_id)
                    .and_then(|user_id| usernames.get(&user_id).cloned())
                    .unwrap_or_default();

                ReportDto {
                    house_id: bill.house_id,
                    bill_id: bill.id,
                    username,
                    used_unit: bill.used_unit,
                    total: bill.total,
                    bill_status: bill.status.into(),
                    create_date: bill.create_date,
                    paid_date: bill.paid_date,
                }
            })
            .collect();

        Ok(reports)
    }
}
