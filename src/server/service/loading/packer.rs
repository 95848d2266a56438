//! First-fit selection of medications for a drone.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::medication::MedicationRepository,
    model::{drone::Drone, medication::Medication},
};

/// Medications accepted for a load, in loading order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedLoad {
    pub medications: Vec<Medication>,
    /// Sum of the accepted weights, never above the drone's weight limit.
    pub total_weight: i32,
}

impl PackedLoad {
    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }
}

/// Greedy pass over `candidates` in the given order.
///
/// A candidate is accepted when it still fits in the remaining capacity; one that
/// does not fit is skipped and later, lighter candidates are still considered.
/// No reordering or backtracking takes place.
pub fn first_fit(
    weight_limit: i32,
    candidates: impl IntoIterator<Item = Medication>,
) -> PackedLoad {
    let mut packed = PackedLoad::default();

    for medication in candidates {
        if medication.weight <= weight_limit - packed.total_weight {
            packed.total_weight += medication.weight;
            packed.medications.push(medication);
        } else {
            tracing::debug!(
                "Medication {} ({}g) does not fit, {}g of {}g already loaded",
                medication.code,
                medication.weight,
                packed.total_weight,
                weight_limit
            );
        }
    }

    packed
}

/// Resolves the requested ids and packs them for `drone`.
///
/// Ids that do not resolve are skipped. A repeated id is only considered at its
/// first position, since a load carries each medication at most once.
///
/// # Returns
/// - `Ok(PackedLoad)` - Accepted medications, possibly empty
/// - `Err(DbErr)` - Lookup failed
pub async fn pack<C: ConnectionTrait>(
    medications: &MedicationRepository<'_, C>,
    drone: &Drone,
    medication_ids: &[i32],
) -> Result<PackedLoad, DbErr> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(medication_ids.len());

    for &id in medication_ids {
        if !seen.insert(id) {
            tracing::debug!("Medication {} requested more than once, ignoring repeat", id);
            continue;
        }

        match medications.get_by_id(id).await? {
            Some(medication) => candidates.push(medication),
            None => tracing::debug!(
                "Medication {} not found, skipping it for drone {}",
                id,
                drone.serial_number
            ),
        }
    }

    Ok(first_fit(drone.weight_limit, candidates))
}
