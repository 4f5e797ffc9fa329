use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BillStatus {
    Paid,
    Unpaid,
    Overdue,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Unpaid => "UNPAID",
            Self::Overdue => "OVERDUE",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token does not name a [`BillStatus`].
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unrecognized bill status: {0:?}, expected one of PAID, UNPAID, OVERDUE")]
pub struct UnknownBillStatus(pub String);

/// Parses the exact upper-case token, ignoring surrounding whitespace.
impl FromStr for BillStatus {
    type Err = UnknownBillStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PAID" => Ok(Self::Paid),
            "UNPAID" => Ok(Self::Unpaid),
            "OVERDUE" => Ok(Self::Overdue),
            other => Err(UnknownBillStatus(other.to_string())),
        }
    }
}

/// A billing record for a house over one period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillDto {
    /// Omit to create a new bill, provide an existing ID to update it
    #[serde(default)]
    pub id: Option<i32>,
    pub house_id: i32,
    pub status: BillStatus,
    pub used_unit: f64,
    pub total: f64,
    pub create_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
}

/// Query parameters for the bill date range search, both formatted as `YYYY-MM-DD`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DateRangeParams {
    /// First creation date included in the range
    pub start_date: String,
    /// Last creation date included in the range
    pub end_date: String,
}
