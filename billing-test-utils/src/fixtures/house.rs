use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn house<'a>(&'a self) -> HouseFixtures<'a> {
        HouseFixtures { context: self }
    }
}

pub struct HouseFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> HouseFixtures<'a> {
    /// Insert a house owned by "Test Owner" in Austin, TX
    pub async fn insert_house(
        &self,
        meter_number: &str,
        user_id: Option<i32>,
    ) -> Result<entity::house::Model, TestError> {
        self.insert_house_with_details("Test Owner", meter_number, "Austin", "TX", user_id)
            .await
    }

    pub async fn insert_house_with_details(
        &self,
        owner_name: &str,
        meter_number: &str,
        city: &str,
        state: &str,
        user_id: Option<i32>,
    ) -> Result<entity::house::Model, TestError> {
        Ok(
            entity::prelude::House::insert(entity::house::ActiveModel {
                owner_name: ActiveValue::Set(owner_name.to_string()),
                meter_number: ActiveValue::Set(meter_number.to_string()),
                city: ActiveValue::Set(city.to_string()),
                state: ActiveValue::Set(state.to_string()),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
