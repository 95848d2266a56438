use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::medication::MedicationDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoadDto {
    pub id: i32,
    pub drone_id: i32,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub created_at: DateTime<Utc>,
    pub weight_loaded: i32,
    /// Medications in the order they were loaded.
    pub medications: Vec<MedicationDto>,
}
