use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "load")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub origin: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub destination: Option<String>,
    pub created_at: DateTimeUtc,
    pub drone_id: i32,
    pub weight_loaded: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::drone::Entity",
        from = "Column::DroneId",
        to = "super::drone::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Drone,
    #[sea_orm(has_many = "super::load_medication::Entity")]
    LoadMedication,
}

impl Related<super::drone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drone.def()
    }
}

impl Related<super::load_medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoadMedication.def()
    }
}

impl Related<super::medication::Entity> for Entity {
    fn to() -> RelationDef {
        super::load_medication::Relation::Medication.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::load_medication::Relation::Load.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
