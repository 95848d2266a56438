//! Periodic battery drain.
//!
//! Every tick lowers the battery of each drone that still has charge by one
//! percent and writes one audit record per drained drone. The policy is a flat
//! decrement regardless of the drone's state or activity.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{data::drone::DroneRepository, error::AppError};

/// Tracing target of battery audit records, routed to its own log file.
pub const BATTERY_AUDIT_TARGET: &str = "battery_check";

/// Battery reading of one drone after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryLevel {
    pub drone_id: i32,
    pub serial_number: String,
    pub battery_capacity: i32,
}

/// Sink for battery audit records.
pub trait BatteryAudit: Send + Sync {
    fn record(&self, level: &BatteryLevel);
}

/// Writes audit records as `tracing` events under `BATTERY_AUDIT_TARGET`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBatteryAudit;

impl BatteryAudit for TracingBatteryAudit {
    fn record(&self, level: &BatteryLevel) {
        tracing::info!(
            target: BATTERY_AUDIT_TARGET,
            serial_number = %level.serial_number,
            battery_capacity = level.battery_capacity,
            "Drone {} battery level: {}%",
            level.serial_number,
            level.battery_capacity
        );
    }
}

pub struct BatteryService<'a> {
    db: &'a DatabaseConnection,
    audit: &'a dyn BatteryAudit,
}

impl<'a> BatteryService<'a> {
    pub fn new(db: &'a DatabaseConnection, audit: &'a dyn BatteryAudit) -> Self {
        Self { db, audit }
    }

    /// Runs one battery tick.
    ///
    /// All decrements happen in one transaction and audit records are only written
    /// after it commits, so a failed tick leaves neither changes nor records behind.
    /// A drone whose battery changed between read and write is skipped this tick.
    ///
    /// # Returns
    /// - `Ok(Vec<BatteryLevel>)` - New level of every drained drone
    /// - `Err(AppError::DbErr)` - Tick aborted and rolled back
    pub async fn run_tick(&self) -> Result<Vec<BatteryLevel>, AppError> {
        let txn = self.db.begin().await?;

        let levels = match Self::drain(&txn).await {
            Ok(levels) => levels,
            Err(err) => {
                if let Err(e) = txn.rollback().await {
                    tracing::error!("Failed to roll back battery tick: {}", e);
                }
                return Err(err.into());
            }
        };

        txn.commit().await?;

        for level in &levels {
            self.audit.record(level);
        }

        tracing::debug!("Battery tick drained {} drones", levels.len());

        Ok(levels)
    }

    async fn drain(txn: &DatabaseTransaction) -> Result<Vec<BatteryLevel>, DbErr> {
        let repo = DroneRepository::new(txn);
        let drones = repo.get_with_charge().await?;

        let mut levels = Vec::with_capacity(drones.len());
        for drone in drones {
            match repo
                .decrement_battery(drone.id, drone.battery_capacity)
                .await?
            {
                Some(battery_capacity) => levels.push(BatteryLevel {
                    drone_id: drone.id,
                    serial_number: drone.serial_number,
                    battery_capacity,
                }),
                None => tracing::debug!(
                    "Battery of drone {} changed during tick, skipping",
                    drone.serial_number
                ),
            }
        }

        Ok(levels)
    }
}
