//! Wire-level data transfer objects.
//!
//! These types define the JSON contract of the HTTP API. They carry no
//! database or business logic; the server converts its domain models into
//! them at the controller boundary.

pub mod api;
pub mod drone;
pub mod load;
pub mod medication;
