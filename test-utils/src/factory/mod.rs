//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` builder for customization
//! and a `create_*` function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let drone = factory::create_drone(&db).await?;
//! let weak = factory::drone::DroneFactory::new(&db)
//!     .battery_capacity(10)
//!     .build()
//!     .await?;
//! let meds = factory::helpers::create_medications_with_weights(&db, &[200, 200, 200]).await?;
//! ```
//!
//! # Available Factories
//!
//! - `drone` - Create drone entities
//! - `medication` - Create medication entities
//! - `load` - Create load entities with their medication links
//! - `helpers` - Unique ids and multi-entity helpers

pub mod drone;
pub mod helpers;
pub mod load;
pub mod medication;

pub use drone::create_drone;
pub use medication::create_medication;
