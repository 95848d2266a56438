//! Load domain model.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::{
    model::{
        drone::{DroneLoadingDto, LoadDroneDto},
        load::LoadDto,
    },
    server::{
        error::AppError,
        model::{drone::Drone, medication::Medication},
    },
};

/// Longest accepted origin or destination, in characters.
pub const MAX_ROUTE_POINT_LEN: usize = 100;

/// A delivery load with its medications in loading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Load {
    pub id: i32,
    pub drone_id: i32,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Sum of the medication weights, in grams.
    pub weight_loaded: i32,
    pub medications: Vec<Medication>,
}

impl Load {
    /// Converts a load entity plus its resolved medications to a domain model.
    pub fn from_entity(entity: entity::load::Model, medications: Vec<Medication>) -> Self {
        Self {
            id: entity.id,
            drone_id: entity.drone_id,
            origin: entity.origin,
            destination: entity.destination,
            created_at: entity.created_at,
            weight_loaded: entity.weight_loaded,
            medications,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self, image_dir: &Path) -> LoadDto {
        LoadDto {
            id: self.id,
            drone_id: self.drone_id,
            origin: self.origin,
            destination: self.destination,
            created_at: self.created_at,
            weight_loaded: self.weight_loaded,
            medications: self
                .medications
                .into_iter()
                .map(|medication| medication.into_dto(image_dir))
                .collect(),
        }
    }
}

/// Input for persisting a packed load.
#[derive(Debug, Clone)]
pub struct CreateLoadParams {
    pub drone_id: i32,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Accepted medications in loading order, without duplicates.
    pub medications: Vec<Medication>,
    pub weight_loaded: i32,
}

/// Loading request as received from the client.
#[derive(Debug, Clone)]
pub struct LoadDroneParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// Candidate medication ids in the order they should be loaded.
    pub medication_ids: Vec<i32>,
}

impl LoadDroneParams {
    /// Builds loading params from the request body.
    ///
    /// # Returns
    /// - `Ok(LoadDroneParams)` - Origin and destination within length
    /// - `Err(AppError::Validation)` - Origin or destination longer than 100 characters
    pub fn from_dto(dto: LoadDroneDto) -> Result<Self, AppError> {
        check_route_point("origin", dto.origin.as_deref())?;
        check_route_point("destination", dto.destination.as_deref())?;

        Ok(Self {
            origin: dto.origin,
            destination: dto.destination,
            medication_ids: dto.medications,
        })
    }
}

fn check_route_point(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(value) if value.chars().count() > MAX_ROUTE_POINT_LEN => {
            Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                field, MAX_ROUTE_POINT_LEN
            )))
        }
        _ => Ok(()),
    }
}

/// Result of a successful loading operation.
#[derive(Debug, Clone)]
pub struct LoadedDrone {
    pub drone: Drone,
    pub load: Load,
}

impl LoadedDrone {
    pub fn into_dto(self, image_dir: &Path) -> DroneLoadingDto {
        DroneLoadingDto {
            drone: self.drone.into_dto(),
            load: self.load.into_dto(image_dir),
        }
    }
}
