use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::medication::{CreateMedicationParams, Medication};

/// Repository providing database operations for medications.
pub struct MedicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MedicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new medication.
    ///
    /// # Arguments
    /// - `params` - Validated name, weight and code
    /// - `image` - File name of an already stored image
    ///
    /// # Returns
    /// - `Ok(Medication)` - The created medication
    /// - `Err(DbErr)` - Database error, including unique violations on the code
    pub async fn create(
        &self,
        params: CreateMedicationParams,
        image: Option<String>,
    ) -> Result<Medication, DbErr> {
        let entity = entity::medication::ActiveModel {
            name: ActiveValue::Set(params.name),
            weight: ActiveValue::Set(params.weight),
            code: ActiveValue::Set(params.code),
            image: ActiveValue::Set(image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Medication::from_entity(entity))
    }

    /// Gets all medications ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Medication>, DbErr> {
        let entities = entity::prelude::Medication::find()
            .order_by_asc(entity::medication::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Medication::from_entity).collect())
    }

    /// Gets a medication by id.
    ///
    /// # Returns
    /// - `Ok(Some(Medication))` - Medication found
    /// - `Ok(None)` - No medication with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Medication>, DbErr> {
        let entity = entity::prelude::Medication::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Medication::from_entity))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Medication>, DbErr> {
        let entity = entity::prelude::Medication::find()
            .filter(entity::medication::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Medication::from_entity))
    }

    /// Gets the medications of a load in the order they were loaded.
    pub async fn get_by_load(&self, load_id: i32) -> Result<Vec<Medication>, DbErr> {
        let rows = entity::prelude::LoadMedication::find()
            .filter(entity::load_medication::Column::LoadId.eq(load_id))
            .order_by_asc(entity::load_medication::Column::Position)
            .find_also_related(entity::prelude::Medication)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, medication)| medication.map(Medication::from_entity))
            .collect())
    }
}
