use super::*;

/// Tests registering a medication with a stored image.
///
/// Expected: Ok with the image file name kept as-is
#[tokio::test]
async fn creates_medication_with_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MedicationRepository::new(db);
    let medication = repo
        .create(
            CreateMedicationParams {
                name: "Amoxicillin".to_string(),
                weight: 120,
                code: "AMOX_250".to_string(),
            },
            Some("0a1b2c.png".to_string()),
        )
        .await?;

    assert!(medication.id > 0);
    assert_eq!(medication.name, "Amoxicillin");
    assert_eq!(medication.weight, 120);
    assert_eq!(medication.code, "AMOX_250");
    assert_eq!(medication.image.as_deref(), Some("0a1b2c.png"));

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Tests that medication codes are unique.
///
/// Expected: Err on the second insert with the same code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::medication::MedicationFactory::new(db)
        .code("DUP_CODE")
        .build()
        .await?;

    let repo = MedicationRepository::new(db);
    let result = repo
        .create(
            CreateMedicationParams {
                name: "Other".to_string(),
                weight: 10,
                code: "DUP_CODE".to_string(),
            },
            None,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
