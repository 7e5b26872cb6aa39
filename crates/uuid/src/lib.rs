//! Patient identifiers and sharded-path utilities.
//!
//! Patient records are addressed by a *canonical* identifier: **32 lowercase hexadecimal
//! characters** (no hyphens), the same value `Uuid::new_v4().simple().to_string()` produces.
//!
//! This crate provides:
//! - [`PatientId`], a wrapper that guarantees the canonical format once constructed.
//! - Sharding logic that derives a record's directory from its identifier.
//!
//! ## Sharded directory layout
//! For a canonical id `u`, stores place the record under:
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! Example:
//! `patient_data/patients/55/0e/550e8400e29b41d4a716446655440000/`
//!
//! This keeps the fan-out of any single directory small.

mod id;

pub use id::PatientId;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
