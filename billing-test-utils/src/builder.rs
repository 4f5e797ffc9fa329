//! Declarative test builder.
//!
//! Table creation is queued on the builder and executed by the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_billing_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the `app_user`, `house` and `bill` tables, created in dependency order.
    pub fn with_billing_tables(mut self) -> Self {
        self.include_billing_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables. Tables referenced by a foreign key must
    /// be added before the tables referencing them.
    ///
    /// ```no_run
    /// use billing_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), billing_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AppUser)
    ///     .with_table(House)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connect to a fresh in-memory database and create the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use test context
    /// - `Err(TestError::DbErr)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_billing_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::House),
                schema.create_table_from_entity(entity::prelude::Bill),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        Ok(context)
    }
}
