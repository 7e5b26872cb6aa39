//! Constants used throughout the patient core crate.

/// Default directory for patient data storage when no explicit directory is configured.
pub const DEFAULT_PATIENT_DATA_DIR: &str = "patient_data";

/// Directory name, under the patient data directory, holding patient records.
pub const PATIENTS_DIR_NAME: &str = "patients";

/// Filename for a stored patient record.
pub const PATIENT_JSON_FILENAME: &str = "patient.json";

/// Scratch file a record is written to before being renamed over [`PATIENT_JSON_FILENAME`].
pub const PATIENT_JSON_TMP_FILENAME: &str = "patient.json.tmp";
