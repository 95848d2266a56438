use super::*;

/// Tests that only idle drones at or above the loading threshold are available.
///
/// Expected: Ok with the idle drone at 25% and the idle drone at 100%
#[tokio::test]
async fn returns_idle_drones_with_enough_battery() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let full = factory::create_drone(db).await?;
    let threshold = factory::drone::DroneFactory::new(db)
        .battery_capacity(MIN_LOADING_BATTERY)
        .build()
        .await?;
    factory::drone::DroneFactory::new(db)
        .battery_capacity(MIN_LOADING_BATTERY - 1)
        .build()
        .await?;
    factory::drone::DroneFactory::new(db)
        .state(DroneState::Delivering)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let available = repo.get_available(MIN_LOADING_BATTERY).await?;

    let ids: Vec<i32> = available.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![full.id, threshold.id]);

    Ok(())
}
