use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "load_medication")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub load_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub medication_id: i32,
    /// Order in which the medication was accepted into the load.
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::load::Entity",
        from = "Column::LoadId",
        to = "super::load::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Load,
    #[sea_orm(
        belongs_to = "super::medication::Entity",
        from = "Column::MedicationId",
        to = "super::medication::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Medication,
}

impl Related<super::load::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Load.def()
    }
}

impl Related<super::medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
