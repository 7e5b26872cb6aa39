//! Patient access service.
//!
//! Mediates between callers and a [`PatientRepository`], translating between the storage model
//! and the wire DTOs with [`PatientMapper`]. Store errors are returned to the caller unchanged.

use crate::error::PatientResult;
use crate::mapper::PatientMapper;
use crate::repositories::PatientRepository;
use api_shared::{PatientRequestDto, PatientResponseDto};
use std::sync::Arc;

/// Pure patient data operations - no API concerns
#[derive(Clone)]
pub struct PatientService {
    repository: Arc<dyn PatientRepository>,
}

impl PatientService {
    /// Creates a service backed by `repository`.
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }

    /// Lists every stored patient, in store order.
    ///
    /// # Errors
    ///
    /// Returns whatever error the store raises while reading.
    pub fn list_patients(&self) -> PatientResult<Vec<PatientResponseDto>> {
        let patients = self.repository.find_all()?;

        Ok(patients.iter().map(PatientMapper::to_dto).collect())
    }

    /// Persists a new patient built from `request` and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns whatever error the store raises while saving, for example
    /// [`PatientError::EmailAlreadyExists`](crate::PatientError::EmailAlreadyExists).
    pub fn create_patient(&self, request: PatientRequestDto) -> PatientResult<PatientResponseDto> {
        let saved = self.repository.save(PatientMapper::to_model(request))?;

        Ok(PatientMapper::to_dto(&saved))
    }
}
