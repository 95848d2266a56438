use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "medication")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub weight: i32,
    #[sea_orm(unique)]
    pub code: String,
    /// File name inside the image store, never an absolute path.
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::load_medication::Entity")]
    LoadMedication,
}

impl Related<super::load_medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoadMedication.def()
    }
}

impl Related<super::load::Entity> for Entity {
    fn to() -> RelationDef {
        super::load_medication::Relation::Load.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::load_medication::Relation::Medication.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
