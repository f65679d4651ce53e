use serde::{Deserialize, Serialize};

/// External shape of a patient, decoupled from the storage schema.
///
/// The name travels as `full-name`; `name` is still accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatientDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "full-name", alias = "name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
}

impl PatientDto {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self { id: None, name: Some(name.into()), age: Some(age.into()) }
    }
}
