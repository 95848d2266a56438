use entity::sea_orm_active_enums::DroneState;
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::drone::{CreateDroneParams, Drone};

/// Repository providing database operations for drones.
pub struct DroneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DroneRepository<'a, C> {
    /// Creates a new DroneRepository over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new drone.
    ///
    /// # Returns
    /// - `Ok(Drone)` - The created drone with its assigned id
    /// - `Err(DbErr)` - Database error, including unique violations on the serial number
    pub async fn create(&self, params: CreateDroneParams) -> Result<Drone, DbErr> {
        let entity = entity::drone::ActiveModel {
            serial_number: ActiveValue::Set(params.serial_number),
            model: ActiveValue::Set(params.model),
            weight_limit: ActiveValue::Set(params.weight_limit),
            battery_capacity: ActiveValue::Set(params.battery_capacity),
            state: ActiveValue::Set(params.state),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Drone::from_entity(entity))
    }

    /// Gets all drones ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Drone>, DbErr> {
        let entities = entity::prelude::Drone::find()
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Drone::from_entity).collect())
    }

    /// Gets a drone by id.
    ///
    /// # Returns
    /// - `Ok(Some(Drone))` - Drone found
    /// - `Ok(None)` - No drone with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Drone>, DbErr> {
        let entity = entity::prelude::Drone::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Drone::from_entity))
    }

    pub async fn get_by_serial_number(&self, serial_number: &str) -> Result<Option<Drone>, DbErr> {
        let entity = entity::prelude::Drone::find()
            .filter(entity::drone::Column::SerialNumber.eq(serial_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Drone::from_entity))
    }

    /// Gets idle drones whose battery is at least `min_battery` percent.
    pub async fn get_available(&self, min_battery: i32) -> Result<Vec<Drone>, DbErr> {
        let entities = entity::prelude::Drone::find()
            .filter(entity::drone::Column::State.eq(DroneState::Idle))
            .filter(entity::drone::Column::BatteryCapacity.gte(min_battery))
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Drone::from_entity).collect())
    }

    /// Atomically moves an idle, sufficiently charged drone into LOADING.
    ///
    /// The state and battery are re-checked by the UPDATE itself, so only one of
    /// several concurrent callers can succeed for the same drone.
    ///
    /// # Returns
    /// - `Ok(true)` - The drone was IDLE with enough battery and is now LOADING
    /// - `Ok(false)` - The drone is missing, busy or under-charged at write time
    /// - `Err(DbErr)` - Database error
    pub async fn claim_for_loading(&self, id: i32, min_battery: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Drone::update_many()
            .col_expr(
                entity::drone::Column::State,
                Expr::value(DroneState::Loading.to_value()),
            )
            .filter(entity::drone::Column::Id.eq(id))
            .filter(entity::drone::Column::State.eq(DroneState::Idle))
            .filter(entity::drone::Column::BatteryCapacity.gte(min_battery))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets the drone's state to `to` only if it is currently `from`.
    ///
    /// # Returns
    /// - `Ok(true)` - The state was `from` and has been changed
    /// - `Ok(false)` - The drone is missing or its state was not `from`
    /// - `Err(DbErr)` - Database error
    pub async fn transition_state(
        &self,
        id: i32,
        from: DroneState,
        to: DroneState,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Drone::update_many()
            .col_expr(entity::drone::Column::State, Expr::value(to.to_value()))
            .filter(entity::drone::Column::Id.eq(id))
            .filter(entity::drone::Column::State.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets every drone with battery left to drain.
    pub async fn get_with_charge(&self) -> Result<Vec<Drone>, DbErr> {
        let entities = entity::prelude::Drone::find()
            .filter(entity::drone::Column::BatteryCapacity.gt(0))
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Drone::from_entity).collect())
    }

    /// Lowers the battery by one percent if it still reads `current`.
    ///
    /// # Returns
    /// - `Ok(Some(level))` - New battery level after the decrement
    /// - `Ok(None)` - Battery changed since it was read, or is already empty
    /// - `Err(DbErr)` - Database error
    pub async fn decrement_battery(&self, id: i32, current: i32) -> Result<Option<i32>, DbErr> {
        if current <= 0 {
            return Ok(None);
        }

        let level = current - 1;
        let result = entity::prelude::Drone::update_many()
            .col_expr(entity::drone::Column::BatteryCapacity, Expr::value(level))
            .filter(entity::drone::Column::Id.eq(id))
            .filter(entity::drone::Column::BatteryCapacity.eq(current))
            .exec(self.db)
            .await?;

        Ok((result.rows_affected == 1).then_some(level))
    }
}
