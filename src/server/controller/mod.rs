//! HTTP controller endpoints for the billing admin API.
//!
//! Axum handlers for houses, bills, users, signup and reports. Controllers parse path and
//! query parameters, call the matching service, and map `Option`/`bool` outcomes onto
//! status codes. Every handler carries a utoipa annotation for the OpenAPI document.

pub mod auth;
pub mod bill;
pub mod house;
pub mod report;
pub mod user;
pub mod util;

/// Path prefix shared by every admin route.
pub static ADMIN_PATH: &str = "/api/admin";
