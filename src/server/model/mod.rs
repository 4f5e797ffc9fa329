//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler and type
//! aliases for the SeaORM database models.

pub mod app;
pub mod db;
