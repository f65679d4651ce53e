use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::patient::{repo::seaorm::SeaOrmPatientRepository, PatientService};

pub type Patients = PatientService<SeaOrmPatientRepository>;

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub patients: Arc<Patients>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmPatientRepository::new(db));
        Self { patients: Arc::new(PatientService::new(repo)) }
    }
}
