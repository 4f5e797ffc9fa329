//! Data access layer repositories.
//!
//! Repositories are thin SeaORM query wrappers, one per table. They return database models
//! and leave conversion to transport shapes to the service layer.

pub mod bill;
pub mod house;
pub mod user;
