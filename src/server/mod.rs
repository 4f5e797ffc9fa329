//! Server application core modules.
//!
//! This module contains the backend of the billing admin API: configuration, HTTP routing and
//! controllers, the service layer, SeaORM repositories, and error handling.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
