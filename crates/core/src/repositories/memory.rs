//! Process-local patient store.

use super::{ensure_unique_email, with_assigned_id, PatientRepository};
use crate::error::{PatientError, PatientResult};
use crate::model::Patient;
use std::sync::RwLock;

/// Keeps patients in insertion order behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryPatientRepository {
    patients: RwLock<Vec<Patient>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatientRepository for InMemoryPatientRepository {
    fn find_all(&self) -> PatientResult<Vec<Patient>> {
        let patients = self
            .patients
            .read()
            .map_err(|e| PatientError::StoreUnavailable(e.to_string()))?;
        Ok(patients.clone())
    }

    fn save(&self, patient: Patient) -> PatientResult<Patient> {
        let mut patients = self
            .patients
            .write()
            .map_err(|e| PatientError::StoreUnavailable(e.to_string()))?;

        ensure_unique_email(patients.iter(), &patient)?;

        let (id, patient) = with_assigned_id(patient);
        match patients.iter_mut().find(|p| p.id == Some(id)) {
            Some(existing) => *existing = patient.clone(),
            None => patients.push(patient.clone()),
        }

        tracing::debug!("saved patient {} in memory store", id);
        Ok(patient)
    }
}
