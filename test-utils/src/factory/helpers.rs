//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and convenience methods for creating entities
//! together with the records they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one medication per weight, in the order given.
///
/// # Arguments
/// - `db` - Database connection
/// - `weights` - Weight in grams for each medication
///
/// # Returns
/// - `Ok(Vec<entity::medication::Model>)` - Created medications in input order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_medications_with_weights(
    db: &DatabaseConnection,
    weights: &[i32],
) -> Result<Vec<entity::medication::Model>, DbErr> {
    let mut medications = Vec::with_capacity(weights.len());
    for weight in weights {
        medications.push(
            crate::factory::medication::MedicationFactory::new(db)
                .weight(*weight)
                .build()
                .await?,
        );
    }
    Ok(medications)
}

/// Creates a drone that has already completed one load.
///
/// This is a convenience method that creates:
/// 1. Drone in the LOADED state
/// 2. Medication
/// 3. Load carrying that medication
///
/// # Returns
/// - `Ok((drone, medication, load))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loaded_drone_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::drone::Model,
        entity::medication::Model,
        entity::load::Model,
    ),
    DbErr,
> {
    let drone = crate::factory::drone::DroneFactory::new(db)
        .state(entity::sea_orm_active_enums::DroneState::Loaded)
        .build()
        .await?;
    let medication = crate::factory::medication::create_medication(db).await?;
    let load = crate::factory::load::LoadFactory::new(db, drone.id)
        .medications(vec![medication.clone()])
        .build()
        .await?;

    Ok((drone, medication, load))
}
