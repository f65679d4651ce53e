//! Conversions between [`Patient`] and [`PatientDto`].
//!
//! Every field copies verbatim; absence in gives absence out.

use super::domain::Patient;
use super::dto::PatientDto;

/// Convert an entity to its DTO (owned version)
impl From<Patient> for PatientDto {
    fn from(p: Patient) -> Self {
        Self { id: p.id, name: p.name, age: p.age }
    }
}

/// Convert an entity to its DTO (by-ref version)
impl From<&Patient> for PatientDto {
    fn from(p: &Patient) -> Self {
        Self { id: p.id, name: p.name.clone(), age: p.age.clone() }
    }
}

/// Convert a DTO to an entity (owned version)
impl From<PatientDto> for Patient {
    fn from(d: PatientDto) -> Self {
        Self { id: d.id, name: d.name, age: d.age }
    }
}

/// Convert a DTO to an entity (by-ref version)
impl From<&PatientDto> for Patient {
    fn from(d: &PatientDto) -> Self {
        Self { id: d.id, name: d.name.clone(), age: d.age.clone() }
    }
}

pub fn to_dto(patient: Option<Patient>) -> Option<PatientDto> {
    patient.map(PatientDto::from)
}

pub fn to_entity(dto: Option<PatientDto>) -> Option<Patient> {
    dto.map(Patient::from)
}
