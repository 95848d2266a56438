//! Loading admission: which drones may start a new load.

use entity::sea_orm_active_enums::DroneState;

use crate::server::{
    error::drone::DroneError,
    model::drone::{Drone, MIN_LOADING_BATTERY},
};

/// Checks that a drone may begin loading.
///
/// State is checked before battery, so a busy drone with a flat battery reports
/// `StateNotIdle`. This only reads the given snapshot; the authoritative check is
/// the conditional claim performed afterwards.
///
/// # Returns
/// - `Ok(&Drone)` - The drone is IDLE with at least `MIN_LOADING_BATTERY` percent
/// - `Err(DroneError::StateNotIdle)` - The drone is not IDLE
/// - `Err(DroneError::BatteryTooLow)` - The battery is below the threshold
pub fn check_admission(drone: &Drone) -> Result<&Drone, DroneError> {
    if drone.state != DroneState::Idle {
        return Err(DroneError::StateNotIdle(drone.state));
    }
    if drone.battery_capacity < MIN_LOADING_BATTERY {
        return Err(DroneError::BatteryTooLow(drone.battery_capacity));
    }
    Ok(drone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;
    use test_utils::fixture;

    fn drone(state: DroneState, battery: i32) -> Drone {
        Drone::from_entity(
            fixture::drone::entity_builder()
                .state(state)
                .battery_capacity(battery)
                .build(),
        )
    }

    #[test]
    fn admits_idle_drone_at_threshold() {
        let drone = drone(DroneState::Idle, MIN_LOADING_BATTERY);

        assert_eq!(check_admission(&drone), Ok(&drone));
    }

    #[test]
    fn rejects_every_busy_state() {
        for state in DroneState::iter().filter(|s| *s != DroneState::Idle) {
            let drone = drone(state, 100);

            assert_eq!(
                check_admission(&drone),
                Err(DroneError::StateNotIdle(state))
            );
        }
    }

    #[test]
    fn rejects_low_battery() {
        let drone = drone(DroneState::Idle, MIN_LOADING_BATTERY - 1);

        assert_eq!(
            check_admission(&drone),
            Err(DroneError::BatteryTooLow(MIN_LOADING_BATTERY - 1))
        );
    }

    /// Both checks fail; the state is reported.
    #[test]
    fn state_takes_precedence_over_battery() {
        let drone = drone(DroneState::Returning, 3);

        assert_eq!(
            check_admission(&drone),
            Err(DroneError::StateNotIdle(DroneState::Returning))
        );
    }

    #[test]
    fn state_error_names_current_state() {
        let message = DroneError::StateNotIdle(DroneState::Delivering).to_string();

        assert_eq!(message, "The drone's state must be IDLE and it's DELIVERING");
    }
}
