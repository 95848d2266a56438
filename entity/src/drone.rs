use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{DroneModel, DroneState};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(100))")]
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: DroneState,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::load::Entity")]
    Load,
}

impl Related<super::load::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Load.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
