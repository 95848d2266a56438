//! Load factory for creating test load entities and their medication links.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test loads attached to a drone.
///
/// `weight_loaded` defaults to the sum of the attached medications' weights.
pub struct LoadFactory<'a> {
    db: &'a DatabaseConnection,
    drone_id: i32,
    origin: Option<String>,
    destination: Option<String>,
    created_at: DateTime<Utc>,
    medications: Vec<entity::medication::Model>,
}

impl<'a> LoadFactory<'a> {
    /// Creates a new LoadFactory for the given drone.
    ///
    /// Defaults:
    /// - origin: `Some("Depot")`
    /// - destination: `Some("Clinic")`
    /// - created_at: now
    /// - medications: none
    pub fn new(db: &'a DatabaseConnection, drone_id: i32) -> Self {
        Self {
            db,
            drone_id,
            origin: Some("Depot".to_string()),
            destination: Some("Clinic".to_string()),
            created_at: Utc::now(),
            medications: Vec::new(),
        }
    }

    pub fn origin(mut self, origin: Option<String>) -> Self {
        self.origin = origin;
        self
    }

    pub fn destination(mut self, destination: Option<String>) -> Self {
        self.destination = destination;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn medications(mut self, medications: Vec<entity::medication::Model>) -> Self {
        self.medications = medications;
        self
    }

    /// Builds and inserts the load and one `load_medication` row per medication.
    ///
    /// # Returns
    /// - `Ok(entity::load::Model)` - Created load entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::load::Model, DbErr> {
        let weight_loaded = self.medications.iter().map(|m| m.weight).sum();

        let load = entity::load::ActiveModel {
            id: ActiveValue::NotSet,
            origin: ActiveValue::Set(self.origin),
            destination: ActiveValue::Set(self.destination),
            created_at: ActiveValue::Set(self.created_at),
            drone_id: ActiveValue::Set(self.drone_id),
            weight_loaded: ActiveValue::Set(weight_loaded),
        }
        .insert(self.db)
        .await?;

        for (position, medication) in self.medications.iter().enumerate() {
            entity::load_medication::ActiveModel {
                load_id: ActiveValue::Set(load.id),
                medication_id: ActiveValue::Set(medication.id),
                position: ActiveValue::Set(position as i32),
            }
            .insert(self.db)
            .await?;
        }

        Ok(load)
    }
}
