//! Test fixtures providing entity models without database insertion.
//!
//! Fixtures are meant for unit tests of pure logic (admission, packing, DTO
//! conversion). Unlike factories they never touch the database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let drone = fixture::drone::entity_builder().battery_capacity(10).build();
//! let pills = fixture::medication::entity_builder().id(7).weight(30).build();
//! ```

pub mod drone;
pub mod medication;
