//! Loading a drone with medications.
//!
//! A loading request runs through three stages:
//!
//! 1. **Admission** - the drone must be IDLE with enough battery (`admission`)
//! 2. **Claim** - a conditional update moves it IDLE -> LOADING; losing this race is a conflict
//! 3. **Packing and commit** - medications are packed first-fit (`packer`), then the load and
//!    the LOADING -> LOADED transition are written in one transaction
//!
//! Any failure after the claim moves the drone back to IDLE.

pub mod admission;
pub mod packer;

use chrono::Utc;
use entity::sea_orm_active_enums::DroneState;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{drone::DroneRepository, load::LoadRepository, medication::MedicationRepository},
    error::{drone::DroneError, AppError},
    model::{
        drone::{Drone, MIN_LOADING_BATTERY},
        load::{CreateLoadParams, LoadDroneParams, LoadedDrone},
    },
    service::drone::drone_not_found,
};

use self::packer::PackedLoad;

pub struct LoadingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoadingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the requested medications onto a drone.
    ///
    /// # Returns
    /// - `Ok(LoadedDrone)` - Drone in LOADED state with the persisted load
    /// - `Err(AppError::NotFound)` - No drone with that id
    /// - `Err(AppError::DroneErr(StateNotIdle | BatteryTooLow))` - Admission refused, nothing changed
    /// - `Err(AppError::DroneErr(Conflict))` - Another request claimed the drone first
    /// - `Err(AppError::DroneErr(NothingToLoad))` - No medication fit, drone back to IDLE
    /// - `Err(AppError::DbErr)` - Storage failure, drone back to IDLE
    pub async fn load(
        &self,
        drone_id: i32,
        params: LoadDroneParams,
    ) -> Result<LoadedDrone, AppError> {
        let drones = DroneRepository::new(self.db);

        let drone = drones
            .get_by_id(drone_id)
            .await?
            .ok_or_else(|| drone_not_found(drone_id))?;

        admission::check_admission(&drone)?;

        if !drones
            .claim_for_loading(drone.id, MIN_LOADING_BATTERY)
            .await?
        {
            return Err(DroneError::Conflict(drone.id).into());
        }

        let result = self.pack_and_commit(&drone, params).await;

        if result.is_err() {
            self.release(&drone).await;
        }

        result
    }

    async fn pack_and_commit(
        &self,
        drone: &Drone,
        params: LoadDroneParams,
    ) -> Result<LoadedDrone, AppError> {
        let packed = packer::pack(
            &MedicationRepository::new(self.db),
            drone,
            &params.medication_ids,
        )
        .await?;

        if packed.is_empty() {
            return Err(DroneError::NothingToLoad.into());
        }

        let txn = self.db.begin().await?;

        match Self::commit(&txn, drone, params, packed).await {
            Ok(loaded) => {
                txn.commit().await?;

                tracing::info!(
                    drone_id = loaded.drone.id,
                    load_id = loaded.load.id,
                    "Drone {} loaded with {} medications ({}g)",
                    loaded.drone.serial_number,
                    loaded.load.medications.len(),
                    loaded.load.weight_loaded
                );

                Ok(loaded)
            }
            Err(err) => {
                if let Err(e) = txn.rollback().await {
                    tracing::error!("Failed to roll back load of drone {}: {}", drone.id, e);
                }
                Err(err)
            }
        }
    }

    /// Writes the load and moves the drone LOADING -> LOADED inside `txn`.
    async fn commit(
        txn: &DatabaseTransaction,
        drone: &Drone,
        params: LoadDroneParams,
        packed: PackedLoad,
    ) -> Result<LoadedDrone, AppError> {
        let load = LoadRepository::new(txn)
            .create(CreateLoadParams {
                drone_id: drone.id,
                origin: params.origin,
                destination: params.destination,
                created_at: Utc::now(),
                medications: packed.medications,
                weight_loaded: packed.total_weight,
            })
            .await?;

        let drones = DroneRepository::new(txn);

        if !drones
            .transition_state(drone.id, DroneState::Loading, DroneState::Loaded)
            .await?
        {
            return Err(DroneError::Conflict(drone.id).into());
        }

        let drone = drones
            .get_by_id(drone.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("drone {}", drone.id)))?;

        Ok(LoadedDrone { drone, load })
    }

    /// Returns a claimed drone to IDLE after a failed loading attempt.
    async fn release(&self, drone: &Drone) {
        match DroneRepository::new(self.db)
            .transition_state(drone.id, DroneState::Loading, DroneState::Idle)
            .await
        {
            Ok(true) => tracing::debug!("Drone {} released back to IDLE", drone.serial_number),
            Ok(false) => tracing::warn!(
                "Drone {} was no longer LOADING when releasing it",
                drone.serial_number
            ),
            Err(e) => tracing::error!(
                "Failed to release drone {} back to IDLE: {}",
                drone.serial_number,
                e
            ),
        }
    }
}
