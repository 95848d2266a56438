use super::*;

/// Tests that loads are listed newest first with their medications.
///
/// Expected: Ok with the later load first and only this drone's loads
#[tokio::test]
async fn returns_loads_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;
    let other = factory::create_drone(db).await?;
    let medication = factory::create_medication(db).await?;

    let older = factory::load::LoadFactory::new(db, drone.id)
        .created_at(Utc::now() - Duration::hours(2))
        .medications(vec![medication.clone()])
        .build()
        .await?;
    let newer = factory::load::LoadFactory::new(db, drone.id)
        .created_at(Utc::now())
        .medications(vec![medication.clone()])
        .build()
        .await?;
    factory::load::LoadFactory::new(db, other.id)
        .medications(vec![medication.clone()])
        .build()
        .await?;

    let repo = LoadRepository::new(db);
    let loads = repo.get_by_drone(drone.id).await?;

    let ids: Vec<i32> = loads.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(loads.iter().all(|l| l.medications.len() == 1));
    assert_eq!(loads[0].medications[0].id, medication.id);

    Ok(())
}

/// Expected: Ok with an empty list for a drone that never carried anything
#[tokio::test]
async fn returns_empty_for_unloaded_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = LoadRepository::new(db);

    assert!(repo.get_by_drone(drone.id).await?.is_empty());

    Ok(())
}
