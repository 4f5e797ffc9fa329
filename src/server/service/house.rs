use sea_orm::DatabaseConnection;

use crate::{
    model::house::HouseDto,
    server::{
        data::house::{HouseParams, HouseRepository},
        error::Error,
        model::db::HouseModel,
    },
};

impl From<HouseModel> for HouseDto {
    fn from(house: HouseModel) -> Self {
        Self {
            id: Some(house.id),
            owner_name: house.owner_name,
            meter_number: house.meter_number,
            city: house.city,
            state: house.state,
            user_id: house.user_id,
        }
    }
}

/// Service for managing houses.
pub struct HouseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HouseService<'a> {
    /// Creates a new instance of [`HouseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a house, or updates it when `house.id` names an existing house.
    ///
    /// An ID that does not match any house is ignored and a new house is created with a
    /// freshly assigned ID.
    ///
    /// # Returns
    /// - `Ok(HouseDto)` - The stored house including its ID
    /// - `Err(Error::DbErr)` - Meter number already taken, user does not exist, or other
    ///   database failure
    pub async fn save_house(&self, house: HouseDto) -> Result<HouseDto, Error> {
        let house_repo = HouseRepository::new(self.db);

        let house_id = house.id;
        let params = HouseParams {
            owner_name: house.owner_name,
            meter_number: house.meter_number,
            city: house.city,
            state: house.state,
            user_id: house.user_id,
        };

        let existing = match house_id {
            Some(house_id) => house_repo.update(house_id, params.clone()).await?,
            None => None,
        };

        let saved = match existing {
            Some(house) => house,
            None => house_repo.create(params).await?,
        };

        Ok(saved.into())
    }

    /// Gets a house by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(HouseDto))` - The house
    /// - `Ok(None)` - No house exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_house_by_id(&self, house_id: i32) -> Result<Option<HouseDto>, Error> {
        let house = HouseRepository::new(self.db).get_by_id(house_id).await?;

        Ok(house.map(HouseDto::from))
    }

    /// Gets every house, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<HouseDto>)` - All houses, empty if none are stored
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_all_houses(&self) -> Result<Vec<HouseDto>, Error> {
        let houses = HouseRepository::new(self.db).get_all().await?;

        Ok(into_dtos(houses))
    }

    /// Deletes a house and its bills.
    ///
    /// # Returns
    /// - `Ok(true)` - House was deleted
    /// - `Ok(false)` - No house exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_house(&self, house_id: i32) -> Result<bool, Error> {
        let result = HouseRepository::new(self.db).delete(house_id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds the house with the provided meter number.
    ///
    /// # Arguments
    /// - `meter_number` - Exact meter number, matched case-sensitively
    ///
    /// # Returns
    /// - `Ok(Some(HouseDto))` - The house using that meter
    /// - `Ok(None)` - No house has that meter number
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_house_by_meter_number(
        &self,
        meter_number: &str,
    ) -> Result<Option<HouseDto>, Error> {
        let house = HouseRepository::new(self.db)
            .get_by_meter_number(meter_number)
            .await?;

        Ok(house.map(HouseDto::from))
    }

    /// Finds houses located in `city`.
    ///
    /// # Returns
    /// - `Ok(Vec<HouseDto>)` - Matching houses, empty if none match
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_houses_by_city(&self, city: &str) -> Result<Vec<HouseDto>, Error> {
        let houses = HouseRepository::new(self.db).get_many_by_city(city).await?;

        Ok(into_dtos(houses))
    }

    /// Finds houses located in `state`.
    ///
    /// # Returns
    /// - `Ok(Vec<HouseDto>)` - Matching houses, empty if none match
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_houses_by_state(&self, state: &str) -> Result<Vec<HouseDto>, Error> {
        let houses = HouseRepository::new(self.db).get_many_by_state(state).await?;

        Ok(into_dtos(houses))
    }

    /// Finds houses assigned to a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the assigned user, an unknown ID simply matches nothing
    ///
    /// # Returns
    /// - `Ok(Vec<HouseDto>)` - The user's houses, empty if none
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_houses_by_user_id(&self, user_id: i32) -> Result<Vec<HouseDto>, Error> {
        let houses = HouseRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(into_dtos(houses))
    }

    /// Finds houses whose owner name equals `owner_name`.
    ///
    /// # Returns
    /// - `Ok(Vec<HouseDto>)` - Matching houses, empty if none match
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find_by_owner_name(&self, owner_name: &str) -> Result<Vec<HouseDto>, Error> {
        let houses = HouseRepository::new(self.db)
            .get_many_by_owner_name(owner_name)
            .await?;

        Ok(into_dtos(houses))
    }
}

fn into_dtos(houses: Vec<HouseModel>) -> Vec<HouseDto> {
    houses.into_iter().map(HouseDto::from).collect()
}
