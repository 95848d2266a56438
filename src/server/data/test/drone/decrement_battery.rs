use super::*;

/// Expected: Ok(Some(4)) for a drone at 5%
#[tokio::test]
async fn decrements_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .battery_capacity(5)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let level = repo.decrement_battery(drone.id, 5).await?;

    assert_eq!(level, Some(4));
    let stored = repo.get_by_id(drone.id).await?.unwrap();
    assert_eq!(stored.battery_capacity, 4);

    Ok(())
}

/// Tests that a stale reading does not decrement.
///
/// Expected: Ok(None) and the battery untouched
#[tokio::test]
async fn skips_when_battery_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .battery_capacity(50)
        .build()
        .await?;

    let repo = DroneRepository::new(db);

    assert_eq!(repo.decrement_battery(drone.id, 51).await?, None);
    let stored = repo.get_by_id(drone.id).await?.unwrap();
    assert_eq!(stored.battery_capacity, 50);

    Ok(())
}

/// Tests that an empty battery never goes negative.
///
/// Expected: Ok(None), battery stays at 0 and the drone is not listed as chargeable
#[tokio::test]
async fn never_goes_below_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .battery_capacity(0)
        .build()
        .await?;

    let repo = DroneRepository::new(db);

    assert_eq!(repo.decrement_battery(drone.id, 0).await?, None);
    assert!(repo.get_with_charge().await?.is_empty());
    let stored = repo.get_by_id(drone.id).await?.unwrap();
    assert_eq!(stored.battery_capacity, 0);

    Ok(())
}
