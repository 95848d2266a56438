//! Medication factory for creating test medication entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test medications with customizable fields.
pub struct MedicationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    weight: i32,
    code: String,
    image: Option<String>,
}

impl<'a> MedicationFactory<'a> {
    /// Creates a new MedicationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Medication-{id}"`
    /// - weight: `50`
    /// - code: `"MED_{id}"`
    /// - image: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Medication-{}", id),
            weight: 50,
            code: format!("MED_{}", id),
            image: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Builds and inserts the medication entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::medication::Model)` - Created medication entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::medication::Model, DbErr> {
        entity::medication::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            weight: ActiveValue::Set(self.weight),
            code: ActiveValue::Set(self.code),
            image: ActiveValue::Set(self.image),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 50 gram medication without an image.
pub async fn create_medication(
    db: &DatabaseConnection,
) -> Result<entity::medication::Model, DbErr> {
    MedicationFactory::new(db).build().await
}
