use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::load::LoadDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DroneModelDto {
    Lightweight,
    Middleweight,
    Cruiserweight,
    Heavyweight,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DroneStateDto {
    Idle,
    Loading,
    Loaded,
    Delivering,
    Delivered,
    Returning,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDroneDto {
    pub serial_number: String,
    pub model: DroneModelDto,
    /// Grams, defaults to 500.
    #[serde(default)]
    pub weight_limit: Option<i32>,
    /// Percent, defaults to 100.
    #[serde(default)]
    pub battery_capacity: Option<i32>,
    /// Defaults to IDLE.
    #[serde(default)]
    pub state: Option<DroneStateDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DroneDto {
    pub id: i32,
    pub serial_number: String,
    pub model: DroneModelDto,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: DroneStateDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoadDroneDto {
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// Medication ids in loading order.
    pub medications: Vec<i32>,
}

/// Drone after a successful loading operation together with the new load.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DroneLoadingDto {
    #[serde(flatten)]
    pub drone: DroneDto,
    pub load: LoadDto,
}

/// Drone with every load it has carried, newest first.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DroneLoadsDto {
    #[serde(flatten)]
    pub drone: DroneDto,
    pub loads: Vec<LoadDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateDroneStateDto {
    pub state: DroneStateDto,
}
