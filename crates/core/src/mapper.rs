//! Translation between the storage model and the wire DTOs.

use crate::model::Patient;
use api_shared::{PatientRequestDto, PatientResponseDto};

/// Pure, total conversions between [`Patient`] and the transfer objects.
pub struct PatientMapper;

impl PatientMapper {
    /// Maps a stored patient to the representation returned to callers.
    ///
    /// An unsaved patient (no id) maps to an empty `id`; stores always return saved records.
    pub fn to_dto(patient: &Patient) -> PatientResponseDto {
        PatientResponseDto {
            id: patient.id.map(|id| id.to_string()).unwrap_or_default(),
            name: patient.name.clone(),
            email: patient.email.clone(),
            address: patient.address.clone(),
            date_of_birth: patient.date_of_birth,
        }
    }

    /// Maps a creation request to an unsaved patient.
    pub fn to_model(request: PatientRequestDto) -> Patient {
        Patient {
            id: None,
            name: request.name,
            email: request.email,
            address: request.address,
            date_of_birth: request.date_of_birth,
            registered_date: request.registered_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use patient_uuid::PatientId;

    fn request() -> PatientRequestDto {
        PatientRequestDto {
            name: "Carol".into(),
            email: "carol@example.com".into(),
            address: "1 High Street".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            registered_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_to_model_has_no_id() {
        let model = PatientMapper::to_model(request());

        assert_eq!(model.id, None);
        assert_eq!(model.name, "Carol");
        assert_eq!(
            model.registered_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_round_trip_preserves_shared_fields() {
        let req = request();
        let dto = PatientMapper::to_dto(&PatientMapper::to_model(req.clone()));

        assert_eq!(dto.name, req.name);
        assert_eq!(dto.email, req.email);
        assert_eq!(dto.address, req.address);
        assert_eq!(dto.date_of_birth, req.date_of_birth);
        assert!(dto.id.is_empty());
    }

    #[test]
    fn test_to_dto_renders_canonical_id() {
        let mut model = PatientMapper::to_model(request());
        let id = PatientId::parse("550e8400e29b41d4a716446655440000").unwrap();
        model.id = Some(id);

        let dto = PatientMapper::to_dto(&model);
        assert_eq!(dto.id, "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let model = PatientMapper::to_model(request());
        assert_eq!(PatientMapper::to_dto(&model), PatientMapper::to_dto(&model));
    }
}
