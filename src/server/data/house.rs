use sea_orm::{
    sea_query::IntoCondition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::HouseModel;

/// Column values for inserting or overwriting a house
#[derive(Clone)]
pub struct HouseParams {
    pub owner_name: String,
    pub meter_number: String,
    pub city: String,
    pub state: String,
    pub user_id: Option<i32>,
}

pub struct HouseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HouseRepository<'a, C> {
    /// Creates a new instance of [`HouseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new house
    pub async fn create(&self, params: HouseParams) -> Result<HouseModel, DbErr> {
        let house = entity::house::ActiveModel {
            owner_name: ActiveValue::Set(params.owner_name),
            meter_number: ActiveValue::Set(params.meter_number),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        };

        house.insert(self.db).await
    }

    /// Overwrites every column of an existing house
    ///
    /// Returns `Ok(None)` if no house exists with the provided ID.
    pub async fn update(
        &self,
        house_id: i32,
        params: HouseParams,
    ) -> Result<Option<HouseModel>, DbErr> {
        let house = match entity::prelude::House::find_by_id(house_id)
            .one(self.db)
            .await?
        {
            Some(house) => house,
            None => return Ok(None),
        };

        let mut house_am = house.into_active_model();
        house_am.owner_name = ActiveValue::Set(params.owner_name);
        house_am.meter_number = ActiveValue::Set(params.meter_number);
        house_am.city = ActiveValue::Set(params.city);
        house_am.state = ActiveValue::Set(params.state);
        house_am.user_id = ActiveValue::Set(params.user_id);

        let house = house_am.update(self.db).await?;

        Ok(Some(house))
    }

    /// Gets a house by ID
    ///
    /// # Returns
    /// - `Ok(Some(HouseModel))` - The house
    /// - `Ok(None)` - No house exists with the provided ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_by_id(&self, house_id: i32) -> Result<Option<HouseModel>, DbErr> {
        entity::prelude::House::find_by_id(house_id)
            .one(self.db)
            .await
    }

    /// Gets all houses ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<HouseModel>)` - All houses
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_all(&self) -> Result<Vec<HouseModel>, DbErr> {
        entity::prelude::House::find()
            .order_by_asc(entity::house::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the house with the provided meter number
    ///
    /// # Returns
    /// - `Ok(Some(HouseModel))` - The house using that meter
    /// - `Ok(None)` - No house has that meter number
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_by_meter_number(
        &self,
        meter_number: &str,
    ) -> Result<Option<HouseModel>, DbErr> {
        entity::prelude::House::find()
            .filter(entity::house::Column::MeterNumber.eq(meter_number))
            .one(self.db)
            .await
    }

    /// Gets houses in a city
    ///
    /// # Returns
    /// - `Ok(Vec<HouseModel>)` - Matching houses ordered by ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_many_by_city(&self, city: &str) -> Result<Vec<HouseModel>, DbErr> {
        self.get_many_by(entity::house::Column::City.eq(city)).await
    }

    /// Gets houses in a state
    ///
    /// # Returns
    /// - `Ok(Vec<HouseModel>)` - Matching houses ordered by ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_many_by_state(&self, state: &str) -> Result<Vec<HouseModel>, DbErr> {
        self.get_many_by(entity::house::Column::State.eq(state)).await
    }

    /// Gets houses assigned to a user
    ///
    /// # Returns
    /// - `Ok(Vec<HouseModel>)` - Matching houses ordered by ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_many_by_user_id(&self, user_id: i32) -> Result<Vec<HouseModel>, DbErr> {
        self.get_many_by(entity::house::Column::UserId.eq(user_id))
            .await
    }

    /// Gets houses by exact owner name
    ///
    /// # Returns
    /// - `Ok(Vec<HouseModel>)` - Matching houses ordered by ID
    /// - `Err(DbErr)` - Database operation failed
    pub async fn get_many_by_owner_name(
        &self,
        owner_name: &str,
    ) -> Result<Vec<HouseModel>, DbErr> {
        self.get_many_by(entity::house::Column::OwnerName.eq(owner_name))
            .await
    }

    /// Deletes a house, cascading to its bills
    ///
    /// Returns OK regardless of house existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, house_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::House::delete_by_id(house_id)
            .exec(self.db)
            .await
    }

    async fn get_many_by<F: IntoCondition>(
        &self,
        condition: F,
    ) -> Result<Vec<HouseModel>, DbErr> {
        entity::prelude::House::find()
            .filter(condition)
            .order_by_asc(entity::house::Column::Id)
            .all(self.db)
            .await
    }
}
