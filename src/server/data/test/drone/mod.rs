use crate::server::{
    data::drone::DroneRepository,
    model::drone::{CreateDroneParams, MIN_LOADING_BATTERY},
};
use entity::sea_orm_active_enums::{DroneModel, DroneState};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod claim_for_loading;
mod create;
mod decrement_battery;
mod get_available;
mod get_by_id;
mod transition_state;
