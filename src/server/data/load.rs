use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::medication::MedicationRepository,
    model::load::{CreateLoadParams, Load},
};

/// Repository providing database operations for loads and their medication links.
pub struct LoadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoadRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a load and one link row per medication.
    ///
    /// Each link records its index in `params.medications` so the loading order
    /// can be reproduced when the load is read back. Callers wanting the load and
    /// the drone's state change to be atomic must pass a transaction.
    ///
    /// # Returns
    /// - `Ok(Load)` - The created load carrying `params.medications`
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn create(&self, params: CreateLoadParams) -> Result<Load, DbErr> {
        let load = entity::load::ActiveModel {
            origin: ActiveValue::Set(params.origin),
            destination: ActiveValue::Set(params.destination),
            created_at: ActiveValue::Set(params.created_at),
            drone_id: ActiveValue::Set(params.drone_id),
            weight_loaded: ActiveValue::Set(params.weight_loaded),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, medication) in params.medications.iter().enumerate() {
            entity::load_medication::ActiveModel {
                load_id: ActiveValue::Set(load.id),
                medication_id: ActiveValue::Set(medication.id),
                position: ActiveValue::Set(position as i32),
            }
            .insert(self.db)
            .await?;
        }

        Ok(Load::from_entity(load, params.medications))
    }

    /// Gets every load a drone has carried, newest first, with medications in
    /// loading order.
    pub async fn get_by_drone(&self, drone_id: i32) -> Result<Vec<Load>, DbErr> {
        let entities = entity::prelude::Load::find()
            .filter(entity::load::Column::DroneId.eq(drone_id))
            .order_by_desc(entity::load::Column::CreatedAt)
            .order_by_desc(entity::load::Column::Id)
            .all(self.db)
            .await?;

        let medication_repo = MedicationRepository::new(self.db);
        let mut loads = Vec::with_capacity(entities.len());
        for entity in entities {
            let medications = medication_repo.get_by_load(entity.id).await?;
            loads.push(Load::from_entity(entity, medications));
        }

        Ok(loads)
    }
}
