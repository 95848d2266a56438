use super::*;

fn params(serial_number: &str) -> CreateDroneParams {
    CreateDroneParams {
        serial_number: serial_number.to_string(),
        model: DroneModel::Cruiserweight,
        weight_limit: 350,
        battery_capacity: 80,
        state: DroneState::Idle,
    }
}

/// Tests registering a drone.
///
/// Expected: Ok with every field persisted and an id assigned
#[tokio::test]
async fn creates_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    let drone = repo.create(params("SN-CREATE")).await?;

    assert!(drone.id > 0);
    assert_eq!(drone.serial_number, "SN-CREATE");
    assert_eq!(drone.model, DroneModel::Cruiserweight);
    assert_eq!(drone.weight_limit, 350);
    assert_eq!(drone.battery_capacity, 80);
    assert_eq!(drone.state, DroneState::Idle);

    let stored = entity::prelude::Drone::find_by_id(drone.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that serial numbers are unique.
///
/// Expected: Err on the second insert with the same serial number
#[tokio::test]
async fn rejects_duplicate_serial_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    repo.create(params("SN-DUP")).await?;
    let result = repo.create(params("SN-DUP")).await;

    assert!(result.is_err());

    Ok(())
}
