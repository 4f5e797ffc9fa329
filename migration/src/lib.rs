pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_app_user_table;
mod m20251101_000002_create_house_table;
mod m20251101_000003_create_bill_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_app_user_table::Migration),
            Box::new(m20251101_000002_create_house_table::Migration),
            Box::new(m20251101_000003_create_bill_table::Migration),
        ]
    }
}
