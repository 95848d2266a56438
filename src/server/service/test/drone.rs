use super::*;
use crate::server::{model::drone::CreateDroneParams, service::drone::DroneService};
use entity::sea_orm_active_enums::DroneModel;

fn params(serial_number: &str) -> CreateDroneParams {
    CreateDroneParams {
        serial_number: serial_number.to_string(),
        model: DroneModel::Middleweight,
        weight_limit: 300,
        battery_capacity: 90,
        state: DroneState::Idle,
    }
}

/// Expected: Err(DuplicateKey) when the serial number is taken
#[tokio::test]
async fn rejects_duplicate_serial_number() {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DroneService::new(db);
    service.create(params("SN-TAKEN")).await.unwrap();
    let result = service.create(params("SN-TAKEN")).await;

    match result {
        Err(AppError::DuplicateKey(msg)) => assert_eq!(msg, "Serial number already registered"),
        other => panic!("expected DuplicateKey, got {:?}", other),
    }
}

/// Expected: Err(NotFound) for an unknown id
#[tokio::test]
async fn get_by_id_not_found() {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DroneService::new(db);

    assert!(matches!(
        service.get_by_id(404).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_loads(404).await,
        Err(AppError::NotFound(_))
    ));
}

/// Tests walking a loaded drone through the delivery cycle back to IDLE.
///
/// Expected: Ok at every step, ending IDLE
#[tokio::test]
async fn walks_delivery_cycle() {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .state(DroneState::Loaded)
        .build()
        .await
        .unwrap();

    let service = DroneService::new(db);
    for state in [
        DroneState::Delivering,
        DroneState::Delivered,
        DroneState::Returning,
        DroneState::Idle,
    ] {
        let updated = service.update_state(drone.id, state).await.unwrap();
        assert_eq!(updated.state, state);
    }
}

/// Tests that LOADING cannot be entered or skipped through manual updates.
///
/// Expected: Err(InvalidTransition) and the state unchanged
#[tokio::test]
async fn rejects_non_manual_transitions() {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await.unwrap();

    let service = DroneService::new(db);
    for to in [DroneState::Loading, DroneState::Loaded, DroneState::Idle] {
        let result = service.update_state(drone.id, to).await;
        assert!(matches!(
            result,
            Err(AppError::DroneErr(DroneError::InvalidTransition {
                from: DroneState::Idle,
                ..
            }))
        ));
    }

    assert_eq!(drone_state(db, drone.id).await, DroneState::Idle);
}

/// Tests listing a drone's loads.
///
/// Expected: Ok with the drone and its single load
#[tokio::test]
async fn lists_loads_of_drone() {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (drone, medication, load) =
        factory::helpers::create_loaded_drone_with_dependencies(db)
            .await
            .unwrap();

    let service = DroneService::new(db);
    let (found, loads) = service.get_loads(drone.id).await.unwrap();

    assert_eq!(found.id, drone.id);
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].id, load.id);
    assert_eq!(loads[0].medications[0].id, medication.id);
}
