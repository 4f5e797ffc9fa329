use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::BillStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub house_id: i32,
    pub status: BillStatus,
    #[sea_orm(column_type = "Double")]
    pub used_unit: f64,
    #[sea_orm(column_type = "Double")]
    pub total: f64,
    pub create_date: Date,
    pub due_date: Date,
    pub paid_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::house::Entity",
        from = "Column::HouseId",
        to = "super::house::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    House,
}

impl Related<super::house::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::House.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
