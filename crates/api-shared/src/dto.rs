//! Transfer objects for the patient APIs.
//!
//! Field names are camelCase on the wire and dates use ISO 8601 (`YYYY-MM-DD`), which is the
//! format the browser client sends and renders. Date parsing happens here, during
//! deserialisation, so malformed input is rejected before it reaches any service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller-supplied attributes for creating a patient.
///
/// Carries no identity; the store assigns one on save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientRequestDto {
    pub name: String,
    pub email: String,
    pub address: String,
    #[schema(value_type = String, format = Date, example = "1990-01-15")]
    pub date_of_birth: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2024-03-01")]
    pub registered_date: NaiveDate,
}

/// Patient attributes returned to callers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponseDto {
    /// Store-assigned identifier (32 lowercase hex characters).
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    #[schema(value_type = String, format = Date, example = "1990-01-15")]
    pub date_of_birth: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Error body returned by the REST API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_and_iso_dates() {
        let json = r#"{
            "name": "Carol",
            "email": "carol@example.com",
            "address": "1 High Street",
            "dateOfBirth": "1990-01-15",
            "registeredDate": "2024-03-01"
        }"#;

        let req: PatientRequestDto = serde_json::from_str(json).expect("request should parse");

        assert_eq!(req.name, "Carol");
        assert_eq!(req.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 15).unwrap());
        assert_eq!(req.registered_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_request_rejects_malformed_date() {
        let json = r#"{
            "name": "Carol",
            "email": "carol@example.com",
            "address": "1 High Street",
            "dateOfBirth": "15/01/1990",
            "registeredDate": "2024-03-01"
        }"#;

        assert!(serde_json::from_str::<PatientRequestDto>(json).is_err());
    }

    #[test]
    fn test_response_serialises_camel_case() {
        let res = PatientResponseDto {
            id: "550e8400e29b41d4a716446655440000".into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            address: "2 Low Road".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 20).unwrap(),
        };

        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["dateOfBirth"], "1985-06-20");
        assert_eq!(value["id"], "550e8400e29b41d4a716446655440000");
        assert!(value.get("registeredDate").is_none());
    }
}
