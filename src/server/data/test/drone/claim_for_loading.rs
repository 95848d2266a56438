use super::*;

/// Tests claiming an idle, charged drone.
///
/// Expected: Ok(true) and the drone is LOADING
#[tokio::test]
async fn claims_idle_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    assert!(repo.claim_for_loading(drone.id, MIN_LOADING_BATTERY).await?);

    let stored = repo.get_by_id(drone.id).await?.unwrap();
    assert_eq!(stored.state, DroneState::Loading);

    Ok(())
}

/// Tests that a drone can only be claimed once.
///
/// Expected: Ok(false) on the second claim
#[tokio::test]
async fn second_claim_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    assert!(repo.claim_for_loading(drone.id, MIN_LOADING_BATTERY).await?);
    assert!(!repo.claim_for_loading(drone.id, MIN_LOADING_BATTERY).await?);

    Ok(())
}

/// Tests that the battery threshold is enforced by the update itself.
///
/// Expected: Ok(false) and the state stays IDLE
#[tokio::test]
async fn does_not_claim_low_battery_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .battery_capacity(10)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    assert!(!repo.claim_for_loading(drone.id, MIN_LOADING_BATTERY).await?);

    let stored = repo.get_by_id(drone.id).await?.unwrap();
    assert_eq!(stored.state, DroneState::Idle);

    Ok(())
}

/// Expected: Ok(false) for an unknown drone
#[tokio::test]
async fn does_not_claim_missing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    assert!(!repo.claim_for_loading(404, MIN_LOADING_BATTERY).await?);

    Ok(())
}
