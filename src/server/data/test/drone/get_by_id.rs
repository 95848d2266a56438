use super::*;

/// Expected: Ok(Some) for an existing drone
#[tokio::test]
async fn finds_existing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    let drone = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(drone.id, created.id);
    assert_eq!(drone.serial_number, created.serial_number);

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);

    assert!(repo.get_by_id(404).await?.is_none());

    Ok(())
}

/// Tests lookup by serial number.
///
/// Expected: Ok(Some) for the registered serial, Ok(None) otherwise
#[tokio::test]
async fn finds_by_serial_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drone::DroneFactory::new(db)
        .serial_number("SN-LOOKUP")
        .build()
        .await?;

    let repo = DroneRepository::new(db);

    let found = repo.get_by_serial_number("SN-LOOKUP").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert!(repo.get_by_serial_number("SN-MISSING").await?.is_none());

    Ok(())
}
