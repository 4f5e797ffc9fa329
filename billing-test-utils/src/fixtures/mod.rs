//! Database fixtures inserted during test execution.
//!
//! - `user` - `app_user` accounts
//! - `house` - houses, optionally assigned to a user
//! - `bill` - bills for a house

pub mod bill;
pub mod house;
pub mod user;
