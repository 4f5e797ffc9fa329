//! Transport models shared by every API route.
//!
//! These are the JSON shapes accepted and returned by the admin API. They carry no
//! database concerns; conversion from SeaORM models happens in the service layer.

pub mod api;
pub mod bill;
pub mod house;
pub mod report;
pub mod user;
