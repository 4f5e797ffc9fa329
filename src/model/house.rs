use serde::{Deserialize, Serialize};

/// A billable location with a single utility meter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HouseDto {
    /// Omit to create a new house, provide an existing ID to update it
    #[serde(default)]
    pub id: Option<i32>,
    pub owner_name: String,
    /// Unique across all houses
    pub meter_number: String,
    pub city: String,
    pub state: String,
    /// The user the house is assigned to, if any
    #[serde(default)]
    pub user_id: Option<i32>,
}
