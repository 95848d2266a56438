use std::sync::Mutex;

use entity::sea_orm_active_enums::DroneState;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{drone::DroneError, AppError},
    service::battery::{BatteryAudit, BatteryLevel},
};

mod drone;

/// Audit sink keeping records in memory.
#[derive(Default)]
struct RecordingAudit {
    records: Mutex<Vec<BatteryLevel>>,
}

impl RecordingAudit {
    fn records(&self) -> Vec<BatteryLevel> {
        self.records.lock().unwrap().clone()
    }
}

impl BatteryAudit for RecordingAudit {
    fn record(&self, level: &BatteryLevel) {
        self.records.lock().unwrap().push(level.clone());
    }
}

async fn load_count(db: &DatabaseConnection) -> u64 {
    entity::prelude::Load::find().count(db).await.unwrap()
}

async fn drone_state(db: &DatabaseConnection, id: i32) -> DroneState {
    entity::prelude::Drone::find_by_id(id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .state
}
