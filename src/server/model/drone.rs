//! Drone domain model, registration parameters and the lifecycle state machine.

use entity::sea_orm_active_enums::{DroneModel, DroneState};

use crate::{
    model::drone::{CreateDroneDto, DroneDto, DroneModelDto, DroneStateDto},
    server::error::AppError,
};

/// Minimum battery percentage a drone needs to start loading.
pub const MIN_LOADING_BATTERY: i32 = 25;

/// Largest weight limit a drone can be registered with, in grams.
pub const MAX_WEIGHT_LIMIT: i32 = 500;

/// Largest battery capacity, in percent.
pub const MAX_BATTERY_CAPACITY: i32 = 100;

/// Longest accepted serial number, in characters.
pub const MAX_SERIAL_NUMBER_LEN: usize = 100;

/// A registered drone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drone {
    pub id: i32,
    pub serial_number: String,
    pub model: DroneModel,
    /// Grams.
    pub weight_limit: i32,
    /// Percent.
    pub battery_capacity: i32,
    pub state: DroneState,
}

impl Drone {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::drone::Model) -> Self {
        Self {
            id: entity.id,
            serial_number: entity.serial_number,
            model: entity.model,
            weight_limit: entity.weight_limit,
            battery_capacity: entity.battery_capacity,
            state: entity.state,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> DroneDto {
        DroneDto {
            id: self.id,
            serial_number: self.serial_number,
            model: self.model.into(),
            weight_limit: self.weight_limit,
            battery_capacity: self.battery_capacity,
            state: self.state.into(),
        }
    }
}

/// Validated input for registering a drone.
#[derive(Debug, Clone)]
pub struct CreateDroneParams {
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: DroneState,
}

impl CreateDroneParams {
    /// Converts the registration DTO, applying defaults and validating bounds.
    ///
    /// # Returns
    /// - `Ok(CreateDroneParams)` - Input within all documented bounds
    /// - `Err(AppError::Validation)` - Serial number, weight limit or battery out of range
    pub fn from_dto(dto: CreateDroneDto) -> Result<Self, AppError> {
        let params = Self {
            serial_number: dto.serial_number.trim().to_string(),
            model: dto.model.into(),
            weight_limit: dto.weight_limit.unwrap_or(MAX_WEIGHT_LIMIT),
            battery_capacity: dto.battery_capacity.unwrap_or(MAX_BATTERY_CAPACITY),
            state: dto.state.map(Into::into).unwrap_or(DroneState::Idle),
        };

        params.validate()?;

        Ok(params)
    }

    fn validate(&self) -> Result<(), AppError> {
        let serial_len = self.serial_number.chars().count();
        if serial_len == 0 || serial_len > MAX_SERIAL_NUMBER_LEN {
            return Err(AppError::Validation(format!(
                "serial_number must be between 1 and {} characters",
                MAX_SERIAL_NUMBER_LEN
            )));
        }
        if self.weight_limit <= 0 || self.weight_limit > MAX_WEIGHT_LIMIT {
            return Err(AppError::Validation(format!(
                "weight_limit must be greater than 0 and at most {}",
                MAX_WEIGHT_LIMIT
            )));
        }
        if !(0..=MAX_BATTERY_CAPACITY).contains(&self.battery_capacity) {
            return Err(AppError::Validation(format!(
                "battery_capacity must be between 0 and {}",
                MAX_BATTERY_CAPACITY
            )));
        }
        Ok(())
    }
}

/// States reachable from `from` in one step.
///
/// ```text
/// IDLE -> LOADING -> LOADED -> DELIVERING -> DELIVERED -> RETURNING -> IDLE
///            |
///            +-> IDLE (nothing could be loaded)
/// ```
pub fn next_states(from: DroneState) -> &'static [DroneState] {
    match from {
        DroneState::Idle => &[DroneState::Loading],
        DroneState::Loading => &[DroneState::Loaded, DroneState::Idle],
        DroneState::Loaded => &[DroneState::Delivering],
        DroneState::Delivering => &[DroneState::Delivered],
        DroneState::Delivered => &[DroneState::Returning],
        DroneState::Returning => &[DroneState::Idle],
    }
}

/// Whether `from -> to` is an edge of the lifecycle.
pub fn can_transition(from: DroneState, to: DroneState) -> bool {
    next_states(from).contains(&to)
}

/// Whether a transition may be requested directly rather than through the
/// loading flow, which owns every edge touching LOADING.
pub fn is_manual_transition(from: DroneState, to: DroneState) -> bool {
    from != DroneState::Loading && to != DroneState::Loading && can_transition(from, to)
}

impl From<DroneModelDto> for DroneModel {
    fn from(dto: DroneModelDto) -> Self {
        match dto {
            DroneModelDto::Lightweight => DroneModel::Lightweight,
            DroneModelDto::Middleweight => DroneModel::Middleweight,
            DroneModelDto::Cruiserweight => DroneModel::Cruiserweight,
            DroneModelDto::Heavyweight => DroneModel::Heavyweight,
        }
    }
}

impl From<DroneModel> for DroneModelDto {
    fn from(model: DroneModel) -> Self {
        match model {
            DroneModel::Lightweight => DroneModelDto::Lightweight,
            DroneModel::Middleweight => DroneModelDto::Middleweight,
            DroneModel::Cruiserweight => DroneModelDto::Cruiserweight,
            DroneModel::Heavyweight => DroneModelDto::Heavyweight,
        }
    }
}

impl From<DroneStateDto> for DroneState {
    fn from(dto: DroneStateDto) -> Self {
        match dto {
            DroneStateDto::Idle => DroneState::Idle,
            DroneStateDto::Loading => DroneState::Loading,
            DroneStateDto::Loaded => DroneState::Loaded,
            DroneStateDto::Delivering => DroneState::Delivering,
            DroneStateDto::Delivered => DroneState::Delivered,
            DroneStateDto::Returning => DroneState::Returning,
        }
    }
}

impl From<DroneState> for DroneStateDto {
    fn from(state: DroneState) -> Self {
        match state {
            DroneState::Idle => DroneStateDto::Idle,
            DroneState::Loading => DroneStateDto::Loading,
            DroneState::Loaded => DroneStateDto::Loaded,
            DroneState::Delivering => DroneStateDto::Delivering,
            DroneState::Delivered => DroneStateDto::Delivered,
            DroneState::Returning => DroneStateDto::Returning,
        }
    }
}
