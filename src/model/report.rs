use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::bill::BillStatus;

/// A bill flattened together with its house and the username of the house owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub house_id: i32,
    pub bill_id: i32,
    /// Empty when the house is not assigned to a user
    pub username: String,
    pub used_unit: f64,
    pub total: f64,
    pub bill_status: BillStatus,
    pub create_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}
