use serde::{Deserialize, Serialize};

/// Patient record as stored.
///
/// `id` is `None` until the record has been persisted; storage assigns it on
/// first save. `age` is free text and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "full-name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
}

impl Patient {
    /// Unsaved record.
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self { id: None, name: Some(name.into()), age: Some(age.into()) }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl From<models::patient::Model> for Patient {
    fn from(m: models::patient::Model) -> Self {
        Self { id: Some(m.id), name: m.name, age: m.age }
    }
}
