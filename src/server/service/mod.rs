//! Service layer between the HTTP controllers and the repositories.
//!
//! Each service wraps one or more repositories, converts database models into transport
//! DTOs and owns the small amount of business logic the admin API has: save-or-update
//! semantics, signup validation, and report assembly.

pub mod auth;
pub mod bill;
pub mod house;
pub mod report;
pub mod user;
