//! # Patient Core
//!
//! Core business logic for the patient service.
//!
//! This crate contains pure data operations:
//! - The storage model ([`Patient`]) and its mapping to wire DTOs ([`PatientMapper`])
//! - The persistence seam ([`PatientRepository`]) with in-memory and file-backed stores
//! - [`PatientService`], which lists and creates patients
//!
//! **No API concerns**: HTTP servers, CLI parsing and process configuration belong in `api-rest`,
//! `patient-cli` and the `patient-run` binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod mapper;
pub mod model;
pub mod patient;
pub mod repositories;

pub use api_shared::{PatientRequestDto, PatientResponseDto};
pub use config::{CoreConfig, StoreKind};
pub use constants::DEFAULT_PATIENT_DATA_DIR;
pub use error::{PatientError, PatientResult};
pub use mapper::PatientMapper;
pub use model::Patient;
pub use patient::PatientService;
pub use patient_uuid::PatientId;
pub use repositories::{open_repository, PatientRepository};
