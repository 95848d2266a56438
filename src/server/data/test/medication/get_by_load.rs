use super::*;

/// Tests that a load's medications come back in loading order, not id order.
///
/// Expected: Ok with medications ordered as they were attached
#[tokio::test]
async fn returns_medications_in_loading_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;
    let medications = factory::helpers::create_medications_with_weights(db, &[10, 20, 30]).await?;
    let reordered = vec![
        medications[2].clone(),
        medications[0].clone(),
        medications[1].clone(),
    ];
    let load = factory::load::LoadFactory::new(db, drone.id)
        .medications(reordered.clone())
        .build()
        .await?;

    let repo = MedicationRepository::new(db);
    let result = repo.get_by_load(load.id).await?;

    let ids: Vec<i32> = result.iter().map(|m| m.id).collect();
    let expected: Vec<i32> = reordered.iter().map(|m| m.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Expected: Ok with an empty list for a load id that does not exist
#[tokio::test]
async fn returns_empty_for_unknown_load() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MedicationRepository::new(db);

    assert!(repo.get_by_load(404).await?.is_empty());

    Ok(())
}
