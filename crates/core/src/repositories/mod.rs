//! Patient stores.
//!
//! [`PatientRepository`] is the persistence seam the service is written against. Two stores are
//! provided:
//!
//! - [`memory::InMemoryPatientRepository`] keeps records in process memory.
//! - [`file::FilePatientRepository`] keeps one JSON document per patient in a sharded directory
//!   tree under the patient data directory.
//!
//! Both enforce the same constraint: no two stored patients share an email address (compared
//! with [`Patient::email_key`]).

pub mod file;
pub mod memory;

use crate::config::{CoreConfig, StoreKind};
use crate::error::{PatientError, PatientResult};
use crate::model::Patient;
use patient_uuid::PatientId;
use std::sync::Arc;

/// Persistence for patient records.
pub trait PatientRepository: Send + Sync {
    /// Returns every stored patient. Order is store-defined.
    fn find_all(&self) -> PatientResult<Vec<Patient>>;

    /// Persists `patient` and returns the stored form.
    ///
    /// A fresh id is assigned when `patient.id` is `None`; a patient with an existing id replaces
    /// the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::EmailAlreadyExists`] if another stored patient has the same email.
    /// Only records the store can read are compared; a record `find_all` skips as unreadable
    /// does not block its email.
    fn save(&self, patient: Patient) -> PatientResult<Patient>;
}

/// Builds the store selected by `cfg`.
pub fn open_repository(cfg: Arc<CoreConfig>) -> Arc<dyn PatientRepository> {
    match cfg.store_kind() {
        StoreKind::File => Arc::new(file::FilePatientRepository::new(cfg)),
        StoreKind::Memory => Arc::new(memory::InMemoryPatientRepository::new()),
    }
}

/// Rejects `candidate` if a different patient in `existing` already uses its email.
pub(crate) fn ensure_unique_email<'a>(
    existing: impl IntoIterator<Item = &'a Patient>,
    candidate: &Patient,
) -> PatientResult<()> {
    let key = candidate.email_key();
    let clash = existing
        .into_iter()
        .any(|p| p.email_key() == key && (candidate.id.is_none() || p.id != candidate.id));

    if clash {
        return Err(PatientError::EmailAlreadyExists(candidate.email.clone()));
    }
    Ok(())
}

/// Returns `patient` with an id, allocating one if absent.
pub(crate) fn with_assigned_id(mut patient: Patient) -> (PatientId, Patient) {
    let id = *patient.id.get_or_insert_with(PatientId::new);
    (id, patient)
}
