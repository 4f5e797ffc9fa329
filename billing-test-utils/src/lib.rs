//! Shared test tooling for the billing admin workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables the in-memory
//! SQLite database needs, and the resulting [`TestContext`] exposes the connection along
//! with fixture helpers for inserting users, houses and bills.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestContext, TestError};
    pub use entity::sea_orm_active_enums::BillStatus;
}
