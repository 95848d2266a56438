//! Drone fixtures for creating in-memory test data.

use entity::{
    drone,
    sea_orm_active_enums::{DroneModel, DroneState},
};

/// Default test drone serial number.
pub const DEFAULT_SERIAL_NUMBER: &str = "DRONE-0001";

/// Default weight limit in grams.
pub const DEFAULT_WEIGHT_LIMIT: i32 = 500;

/// Default battery capacity in percent.
pub const DEFAULT_BATTERY_CAPACITY: i32 = 100;

/// Creates an idle, fully charged drone entity model with id `1`.
pub fn entity() -> drone::Model {
    entity_builder().build()
}

/// Creates a drone entity builder for customization.
pub fn entity_builder() -> DroneEntityBuilder {
    DroneEntityBuilder {
        id: 1,
        serial_number: DEFAULT_SERIAL_NUMBER.to_string(),
        model: DroneModel::Lightweight,
        weight_limit: DEFAULT_WEIGHT_LIMIT,
        battery_capacity: DEFAULT_BATTERY_CAPACITY,
        state: DroneState::Idle,
    }
}

/// Builder for drone entity models.
pub struct DroneEntityBuilder {
    id: i32,
    serial_number: String,
    model: DroneModel,
    weight_limit: i32,
    battery_capacity: i32,
    state: DroneState,
}

impl DroneEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    pub fn model(mut self, model: DroneModel) -> Self {
        self.model = model;
        self
    }

    pub fn weight_limit(mut self, weight_limit: i32) -> Self {
        self.weight_limit = weight_limit;
        self
    }

    pub fn battery_capacity(mut self, battery_capacity: i32) -> Self {
        self.battery_capacity = battery_capacity;
        self
    }

    pub fn state(mut self, state: DroneState) -> Self {
        self.state = state;
        self
    }

    pub fn build(self) -> drone::Model {
        drone::Model {
            id: self.id,
            serial_number: self.serial_number,
            model: self.model,
            weight_limit: self.weight_limit,
            battery_capacity: self.battery_capacity,
            state: self.state,
        }
    }
}
