//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! fleet's rules (admission, packing, lifecycle transitions, battery drain), own
//! transaction boundaries for multi-step writes and translate storage failures
//! into `AppError` variants.

pub mod battery;
pub mod drone;
pub mod image;
pub mod loading;
pub mod medication;

#[cfg(test)]
mod test;
