use super::*;

/// Tests persisting a load together with its medication links.
///
/// Expected: Ok with one link row per medication and the weight as given
#[tokio::test]
async fn creates_load_with_medications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;
    let medications: Vec<Medication> =
        factory::helpers::create_medications_with_weights(db, &[200, 150])
            .await?
            .into_iter()
            .map(Medication::from_entity)
            .collect();

    let repo = LoadRepository::new(db);
    let load = repo
        .create(CreateLoadParams {
            drone_id: drone.id,
            origin: Some("Depot".to_string()),
            destination: Some("Hospital".to_string()),
            created_at: Utc::now(),
            medications: medications.clone(),
            weight_loaded: 350,
        })
        .await?;

    assert_eq!(load.drone_id, drone.id);
    assert_eq!(load.weight_loaded, 350);
    assert_eq!(load.medications, medications);

    let links = entity::prelude::LoadMedication::find()
        .filter(entity::load_medication::Column::LoadId.eq(load.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 2);

    Ok(())
}
