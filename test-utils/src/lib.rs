//! Drone Fleet Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the drone
//! fleet backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert entities with sensible defaults, and fixtures that
//! build entity models without touching the database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_drone_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_fleet_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let drone = factory::create_drone(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
