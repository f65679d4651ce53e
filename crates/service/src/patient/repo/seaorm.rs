use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::patient::domain::Patient;
use crate::patient::errors::PatientError;
use crate::patient::repository::PatientRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmPatientRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPatientRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl PatientRepository for SeaOrmPatientRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, PatientError> {
        let row = models::patient::find_by_id(&self.db, id).await?;
        Ok(row.map(Patient::from))
    }

    async fn find_all(&self) -> Result<Vec<Patient>, PatientError> {
        let rows = models::patient::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Patient::from).collect())
    }

    async fn save(&self, patient: Patient) -> Result<Patient, PatientError> {
        let Patient { id, name, age } = patient;
        if let Some(id) = id {
            if let Some(row) = models::patient::overwrite(&self.db, id, name.clone(), age.clone()).await? {
                return Ok(row.into());
            }
            debug!(id, "no stored row for preset id; inserting with a generated id");
        }
        let row = models::patient::insert(&self.db, name, age).await?;
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), PatientError> {
        let removed = models::patient::delete(&self.db, id).await?;
        debug!(id, removed, "delete patient");
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, PatientError> {
        Ok(models::patient::exists(&self.db, id).await?)
    }
}
