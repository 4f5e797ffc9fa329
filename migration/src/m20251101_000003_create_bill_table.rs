use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_house_table::House;

static FK_BILL_HOUSE_ID: &str = "fk_bill_house_id";
static IDX_BILL_CREATE_DATE: &str = "idx_bill_create_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bill::Table)
                    .if_not_exists()
                    .col(pk_auto(Bill::Id))
                    .col(integer(Bill::HouseId))
                    .col(string_len(Bill::Status, 16))
                    .col(double(Bill::UsedUnit))
                    .col(double(Bill::Total))
                    .col(date(Bill::CreateDate))
                    .col(date(Bill::DueDate))
                    .col(date_null(Bill::PaidDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BILL_HOUSE_ID)
                    .from_tbl(Bill::Table)
                    .from_col(Bill::HouseId)
                    .to_tbl(House::Table)
                    .to_col(House::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BILL_CREATE_DATE)
                    .table(Bill::Table)
                    .col(Bill::CreateDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BILL_HOUSE_ID)
                    .table(Bill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Bill {
    Table,
    Id,
    HouseId,
    Status,
    UsedUnit,
    Total,
    CreateDate,
    DueDate,
    PaidDate,
}
