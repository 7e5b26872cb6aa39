//! # API Shared
//!
//! Shared wire types and services for the patient APIs.
//!
//! Contains:
//! - Transfer objects exchanged with callers (`dto` module)
//! - Shared services like `HealthService`
//!
//! Used by `patient-core` (mapping) and `api-rest` (transport).

pub mod dto;
pub mod health;

pub use dto::{ErrorRes, HealthRes, PatientRequestDto, PatientResponseDto};
pub use health::HealthService;
