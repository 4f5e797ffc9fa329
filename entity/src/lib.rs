//! SeaORM entities for the billing database.

pub mod prelude;

pub mod app_user;
pub mod bill;
pub mod house;
pub mod sea_orm_active_enums;
