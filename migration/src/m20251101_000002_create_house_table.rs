use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_app_user_table::AppUser;

static FK_HOUSE_USER_ID: &str = "fk_house_user_id";
static IDX_HOUSE_CITY: &str = "idx_house_city";
static IDX_HOUSE_STATE: &str = "idx_house_state";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(House::Table)
                    .if_not_exists()
                    .col(pk_auto(House::Id))
                    .col(string(House::OwnerName))
                    .col(string_uniq(House::MeterNumber))
                    .col(string(House::City))
                    .col(string(House::State))
                    .col(integer_null(House::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HOUSE_USER_ID)
                    .from_tbl(House::Table)
                    .from_col(House::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HOUSE_CITY)
                    .table(House::Table)
                    .col(House::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HOUSE_STATE)
                    .table(House::Table)
                    .col(House::State)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_HOUSE_USER_ID)
                    .table(House::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(House::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum House {
    Table,
    Id,
    OwnerName,
    MeterNumber,
    City,
    State,
    UserId,
}
