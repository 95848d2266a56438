use entity::sea_orm_active_enums::DroneState;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{drone::DroneRepository, load::LoadRepository},
    error::{drone::DroneError, AppError},
    model::{
        drone::{self, CreateDroneParams, Drone, MIN_LOADING_BATTERY},
        load::Load,
    },
};

pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new drone.
    ///
    /// # Returns
    /// - `Ok(Drone)` - The registered drone
    /// - `Err(AppError::DuplicateKey)` - Serial number already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateDroneParams) -> Result<Drone, AppError> {
        let repo = DroneRepository::new(self.db);

        if repo
            .get_by_serial_number(&params.serial_number)
            .await?
            .is_some()
        {
            return Err(duplicate_serial_number());
        }

        // A concurrent registration can still win between the check and the insert.
        repo.create(params).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_serial_number(),
            _ => AppError::DbErr(err),
        })
    }

    pub async fn get_all(&self) -> Result<Vec<Drone>, AppError> {
        Ok(DroneRepository::new(self.db).get_all().await?)
    }

    /// Gets a drone by id.
    ///
    /// # Returns
    /// - `Ok(Drone)` - Drone found
    /// - `Err(AppError::NotFound)` - No drone with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Drone, AppError> {
        DroneRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| drone_not_found(id))
    }

    /// Drones that would currently pass loading admission.
    pub async fn get_available(&self) -> Result<Vec<Drone>, AppError> {
        Ok(DroneRepository::new(self.db)
            .get_available(MIN_LOADING_BATTERY)
            .await?)
    }

    /// Gets a drone together with every load it has carried, newest first.
    pub async fn get_loads(&self, id: i32) -> Result<(Drone, Vec<Load>), AppError> {
        let drone = self.get_by_id(id).await?;
        let loads = LoadRepository::new(self.db).get_by_drone(drone.id).await?;

        Ok((drone, loads))
    }

    /// Moves a drone one step along the delivery cycle.
    ///
    /// Edges into and out of LOADING belong to the loading flow and are rejected.
    /// The change is applied with a compare-and-set on the state that was read.
    ///
    /// # Returns
    /// - `Ok(Drone)` - Drone in its new state
    /// - `Err(AppError::NotFound)` - No drone with that id
    /// - `Err(AppError::DroneErr(InvalidTransition))` - Not a manual lifecycle edge
    /// - `Err(AppError::DroneErr(Conflict))` - State changed concurrently
    pub async fn update_state(&self, id: i32, to: DroneState) -> Result<Drone, AppError> {
        let repo = DroneRepository::new(self.db);

        let current = repo.get_by_id(id).await?.ok_or_else(|| drone_not_found(id))?;

        if !drone::is_manual_transition(current.state, to) {
            return Err(DroneError::InvalidTransition {
                from: current.state,
                to,
            }
            .into());
        }

        if !repo.transition_state(id, current.state, to).await? {
            return Err(DroneError::Conflict(id).into());
        }

        tracing::info!(
            drone_id = id,
            "Drone {} moved from {:?} to {:?}",
            current.serial_number,
            current.state,
            to
        );

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::DbErr(DbErr::RecordNotFound(format!("drone {}", id))))
    }
}

pub(crate) fn drone_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Drone with id {} not found", id))
}

fn duplicate_serial_number() -> AppError {
    AppError::DuplicateKey("Serial number already registered".to_string())
}
