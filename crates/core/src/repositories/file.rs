//! File-backed patient store.
//!
//! Each patient is one JSON document in a sharded directory tree:
//!
//! ```text
//! <patient_data_dir>/
//!   patients/
//!     <s1>/
//!       <s2>/
//!         <id>/
//!           patient.json
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the patient id.

use super::{ensure_unique_email, with_assigned_id, PatientRepository};
use crate::config::CoreConfig;
use crate::constants::{PATIENT_JSON_FILENAME, PATIENT_JSON_TMP_FILENAME};
use crate::error::{PatientError, PatientResult};
use crate::model::Patient;
use patient_uuid::PatientId;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Stores patients as JSON files under [`CoreConfig::patients_dir`].
#[derive(Debug)]
pub struct FilePatientRepository {
    cfg: Arc<CoreConfig>,
    // Held across the uniqueness check and the write.
    write_lock: Mutex<()>,
}

impl FilePatientRepository {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            write_lock: Mutex::new(()),
        }
    }

    fn read_patient(id_path: &Path) -> Option<Patient> {
        let patient_path = id_path.join(PATIENT_JSON_FILENAME);
        if !patient_path.is_file() {
            return None;
        }

        let contents = match fs::read_to_string(&patient_path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", patient_path.display(), e);
                return None;
            }
        };

        let mut patient = match serde_json::from_str::<Patient>(&contents) {
            Ok(patient) => patient,
            Err(e) => {
                tracing::warn!(
                    "failed to parse patient.json: {} - {}",
                    patient_path.display(),
                    e
                );
                return None;
            }
        };

        if patient.id.is_none() {
            let dir_name = id_path.file_name().and_then(|os| os.to_str()).unwrap_or("");
            match PatientId::parse(dir_name) {
                Ok(id) => patient.id = Some(id),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", patient_path.display(), e);
                    return None;
                }
            }
        }

        Some(patient)
    }
}

impl PatientRepository for FilePatientRepository {
    /// Traverses `patients/<s1>/<s2>/<id>/patient.json`.
    ///
    /// A missing `patients/` directory means an empty store. Records that cannot be read or
    /// parsed are logged and skipped, so they also take no part in the email uniqueness check
    /// made by [`save`](Self::save).
    fn find_all(&self) -> PatientResult<Vec<Patient>> {
        let patients_dir = self.cfg.patients_dir();
        let mut patients = Vec::new();

        let s1_iter = match fs::read_dir(&patients_dir) {
            Ok(it) => it,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(patients),
            Err(e) => return Err(PatientError::FileRead(e)),
        };

        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(_) => continue,
            };

            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(_) => continue,
                };

                for id_ent in id_iter.flatten() {
                    let id_path = id_ent.path();
                    if !id_path.is_dir() {
                        continue;
                    }

                    if let Some(patient) = Self::read_patient(&id_path) {
                        patients.push(patient);
                    }
                }
            }
        }

        Ok(patients)
    }

    fn save(&self, patient: Patient) -> PatientResult<Patient> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| PatientError::StoreUnavailable(e.to_string()))?;

        let existing = self.find_all()?;
        ensure_unique_email(&existing, &patient)?;

        let patients_dir = self.cfg.patients_dir();
        fs::create_dir_all(&patients_dir).map_err(PatientError::StorageDirCreation)?;

        let (id, patient) = with_assigned_id(patient);
        let patient_dir = id.sharded_dir(&patients_dir);
        fs::create_dir_all(&patient_dir).map_err(PatientError::PatientDirCreation)?;

        // Readers only ever see a complete patient.json: write aside, then rename over it.
        let json = serde_json::to_string_pretty(&patient).map_err(PatientError::Serialization)?;
        let tmp_path = patient_dir.join(PATIENT_JSON_TMP_FILENAME);
        fs::write(&tmp_path, json).map_err(PatientError::FileWrite)?;
        fs::rename(&tmp_path, patient_dir.join(PATIENT_JSON_FILENAME))
            .map_err(PatientError::FileWrite)?;

        tracing::debug!("saved patient {} to {}", id, patient_dir.display());
        Ok(patient)
    }
}
