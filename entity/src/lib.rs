//! SeaORM entities for the drone fleet database.
//!
//! One module per table plus the shared active enums. Relations mirror the
//! foreign keys created by the `migration` crate.

pub mod prelude;

pub mod drone;
pub mod load;
pub mod load_medication;
pub mod medication;
pub mod sea_orm_active_enums;
