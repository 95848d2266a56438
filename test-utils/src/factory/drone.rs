//! Drone factory for creating test drone entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::{DroneModel, DroneState};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drones with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::drone::DroneFactory;
///
/// let drone = DroneFactory::new(&db)
///     .battery_capacity(10)
///     .state(DroneState::Loaded)
///     .build()
///     .await?;
/// ```
pub struct DroneFactory<'a> {
    db: &'a DatabaseConnection,
    serial_number: String,
    model: DroneModel,
    weight_limit: i32,
    battery_capacity: i32,
    state: DroneState,
}

impl<'a> DroneFactory<'a> {
    /// Creates a new DroneFactory with default values.
    ///
    /// Defaults:
    /// - serial_number: `"SN-{id}"` where id is auto-incremented
    /// - model: `LIGHTWEIGHT`
    /// - weight_limit: `500`
    /// - battery_capacity: `100`
    /// - state: `IDLE`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            serial_number: format!("SN-{}", id),
            model: DroneModel::Lightweight,
            weight_limit: 500,
            battery_capacity: 100,
            state: DroneState::Idle,
        }
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    pub fn model(mut self, model: DroneModel) -> Self {
        self.model = model;
        self
    }

    pub fn weight_limit(mut self, weight_limit: i32) -> Self {
        self.weight_limit = weight_limit;
        self
    }

    pub fn battery_capacity(mut self, battery_capacity: i32) -> Self {
        self.battery_capacity = battery_capacity;
        self
    }

    pub fn state(mut self, state: DroneState) -> Self {
        self.state = state;
        self
    }

    /// Builds and inserts the drone entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::drone::Model)` - Created drone entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::drone::Model, DbErr> {
        entity::drone::ActiveModel {
            id: ActiveValue::NotSet,
            serial_number: ActiveValue::Set(self.serial_number),
            model: ActiveValue::Set(self.model),
            weight_limit: ActiveValue::Set(self.weight_limit),
            battery_capacity: ActiveValue::Set(self.battery_capacity),
            state: ActiveValue::Set(self.state),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an idle drone with a full battery and the maximum weight limit.
///
/// Shorthand for `DroneFactory::new(db).build().await`.
pub async fn create_drone(db: &DatabaseConnection) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db).build().await
}
