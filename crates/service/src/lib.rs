//! Service layer for patient records on top of `models`.
//! - Separates orchestration from data access behind `PatientRepository`.
//! - Owns the entity/DTO boundary and the mapper between them.

pub mod patient;
#[cfg(test)]
pub mod test_support;
