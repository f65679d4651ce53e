use thiserror::Error;

/// Failures surfaced by patient storage. Not-found is never an error here.
#[derive(Debug, Error)]
pub enum PatientError {
    #[error("repository error: {0}")]
    Repository(String),
}

impl PatientError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            PatientError::Repository(_) => 1200,
        }
    }
}

impl From<models::errors::ModelError> for PatientError {
    fn from(e: models::errors::ModelError) -> Self {
        PatientError::Repository(e.to_string())
    }
}
