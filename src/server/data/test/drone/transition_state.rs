use super::*;

/// Tests a transition whose expected current state matches.
///
/// Expected: Ok(true) and the new state persisted
#[tokio::test]
async fn transitions_when_state_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .state(DroneState::Loaded)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let changed = repo
        .transition_state(drone.id, DroneState::Loaded, DroneState::Delivering)
        .await?;

    assert!(changed);
    let stored = repo.get_by_id(drone.id).await?.unwrap();
    assert_eq!(stored.state, DroneState::Delivering);

    Ok(())
}

/// Tests a transition whose expected current state is stale.
///
/// Expected: Ok(false) and the state untouched
#[tokio::test]
async fn does_not_transition_on_stale_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    let changed = repo
        .transition_state(drone.id, DroneState::Loading, DroneState::Loaded)
        .await?;

    assert!(!changed);
    let stored = repo.get_by_id(drone.id).await?.unwrap();
    assert_eq!(stored.state, DroneState::Idle);

    Ok(())
}
