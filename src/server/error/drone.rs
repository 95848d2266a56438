use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::DroneState;
use sea_orm::ActiveEnum;
use thiserror::Error;

use crate::server::{error::error_response, model::drone::MIN_LOADING_BATTERY};

/// Rejections raised by the loading flow and the drone lifecycle.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DroneError {
    /// Loading requires an IDLE drone.
    #[error("The drone's state must be IDLE and it's {}", .0.to_value())]
    StateNotIdle(DroneState),

    /// Loading requires at least `MIN_LOADING_BATTERY` percent of battery.
    #[error(
        "The drone's battery level is {0}%, below the required {min} percent",
        min = MIN_LOADING_BATTERY
    )]
    BatteryTooLow(i32),

    /// No requested medication fits within the drone's weight limit.
    ///
    /// The drone has already been returned to IDLE when this is raised.
    #[error("Neither medication could be loaded.")]
    NothingToLoad,

    /// Another operation changed the drone's state first.
    #[error("Drone {0} was claimed by another operation, please retry")]
    Conflict(i32),

    /// Requested state change is not an edge of the lifecycle.
    #[error("Cannot change drone state from {} to {}", .from.to_value(), .to.to_value())]
    InvalidTransition {
        /// State the drone is currently in
        from: DroneState,
        /// State that was requested
        to: DroneState,
    },
}

/// Converts drone errors into HTTP responses.
///
/// - `StateNotIdle` / `BatteryTooLow` → 405 Method Not Allowed
/// - `NothingToLoad` → 406 Not Acceptable
/// - `Conflict` / `InvalidTransition` → 409 Conflict
impl IntoResponse for DroneError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::StateNotIdle(_) | Self::BatteryTooLow(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::NothingToLoad => StatusCode::NOT_ACCEPTABLE,
            Self::Conflict(_) | Self::InvalidTransition { .. } => StatusCode::CONFLICT,
        };

        tracing::debug!("Drone operation rejected: {}", self);

        error_response(status, self.to_string())
    }
}
