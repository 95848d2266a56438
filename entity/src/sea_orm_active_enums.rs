use sea_orm::entity::prelude::*;

/// Weight class of a drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DroneModel {
    #[sea_orm(string_value = "LIGHTWEIGHT")]
    Lightweight,
    #[sea_orm(string_value = "MIDDLEWEIGHT")]
    Middleweight,
    #[sea_orm(string_value = "CRUISERWEIGHT")]
    Cruiserweight,
    #[sea_orm(string_value = "HEAVYWEIGHT")]
    Heavyweight,
}

/// Operational state of a drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DroneState {
    #[sea_orm(string_value = "IDLE")]
    Idle,
    #[sea_orm(string_value = "LOADING")]
    Loading,
    #[sea_orm(string_value = "LOADED")]
    Loaded,
    #[sea_orm(string_value = "DELIVERING")]
    Delivering,
    #[sea_orm(string_value = "DELIVERED")]
    Delivered,
    #[sea_orm(string_value = "RETURNING")]
    Returning,
}
