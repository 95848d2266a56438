//! HTTP request handlers.
//!
//! Controllers convert DTOs into validated parameters, call the service layer and
//! convert the resulting domain models back into DTOs. Every handler carries a
//! `utoipa::path` annotation and is registered through `OpenApiRouter`.

pub mod drone;
pub mod medication;

#[cfg(test)]
mod test;
