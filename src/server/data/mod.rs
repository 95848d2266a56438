//! Database repository layer for the fleet inventory.
//!
//! Repositories borrow any SeaORM connection, so the same queries run against the
//! pool or inside a transaction. They convert entity models into domain models at
//! this boundary and report failures as `DbErr`. State changes that race with
//! other requests are expressed as conditional updates returning whether a row
//! matched.

pub mod drone;
pub mod load;
pub mod medication;

#[cfg(test)]
mod test;
