//! Storage representation of a patient.

use chrono::NaiveDate;
use patient_uuid::PatientId;
use serde::{Deserialize, Serialize};

/// A persisted patient record.
///
/// `id` is `None` until a store saves the record and assigns one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PatientId>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub registered_date: NaiveDate,
}

impl Patient {
    /// Key used by stores to enforce email uniqueness.
    ///
    /// Comparison ignores surrounding whitespace and ASCII case.
    pub fn email_key(&self) -> String {
        self.email.trim().to_ascii_lowercase()
    }
}
