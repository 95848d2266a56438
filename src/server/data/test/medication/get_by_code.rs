use super::*;

/// Expected: Ok(Some) for a registered code, Ok(None) otherwise
#[tokio::test]
async fn finds_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::medication::MedicationFactory::new(db)
        .code("IBU_200")
        .build()
        .await?;

    let repo = MedicationRepository::new(db);

    let found = repo.get_by_code("IBU_200").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert!(repo.get_by_code("IBU_400").await?.is_none());
    assert!(repo.get_by_id(created.id).await?.is_some());
    assert!(repo.get_by_id(created.id + 1).await?.is_none());

    Ok(())
}
