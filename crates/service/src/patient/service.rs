use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::Patient;
use super::dto::PatientDto;
use super::errors::PatientError;
use super::mapper;
use super::repository::PatientRepository;

/// Patient application service independent of web framework.
///
/// Holds no state beyond the repository handle; every call is a single
/// storage round trip.
pub struct PatientService<R: PatientRepository> {
    repo: Arc<R>,
}

impl<R: PatientRepository> PatientService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look a patient up by id. A missing id is `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Patient>, PatientError> {
        self.repo.find_by_id(id).await
    }

    /// Persist a patient and return it with its id.
    ///
    /// A record that already carries an id overwrites the stored row; if no
    /// row has that id it is inserted under a freshly generated one.
    ///
    /// # Examples
    /// ```
    /// use service::patient::{Patient, PatientService, repository::mock::InMemoryPatientRepository};
    /// use std::sync::Arc;
    /// let svc = PatientService::new(Arc::new(InMemoryPatientRepository::default()));
    /// let saved = tokio_test::block_on(svc.create(Patient::new("Mohanad", "40"))).unwrap();
    /// assert!(saved.id.is_some());
    /// assert_eq!(saved.name.as_deref(), Some("Mohanad"));
    /// ```
    #[instrument(skip(self, patient), fields(id = ?patient.id))]
    pub async fn create(&self, patient: Patient) -> Result<Patient, PatientError> {
        if let Some(id) = patient.id {
            warn!(id, "create called with preset id; overwrite if stored, else insert with generated id");
        }
        let saved = self.repo.save(patient).await?;
        info!(id = ?saved.id, "patient_saved");
        Ok(saved)
    }

    /// Remove a patient. Deleting an unknown id is a no-op.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), PatientError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "patient_deleted");
        Ok(())
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, PatientError> {
        self.repo.exists_by_id(id).await
    }

    /// All stored patients, ordered by id.
    pub async fn list(&self) -> Result<Vec<Patient>, PatientError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_dto_by_id(&self, id: i64) -> Result<Option<PatientDto>, PatientError> {
        let patient = self.get_by_id(id).await?;
        Ok(mapper::to_dto(patient))
    }

    /// DTO-facing persistence path.
    ///
    /// # Examples
    /// ```
    /// use service::patient::{PatientDto, PatientService, repository::mock::InMemoryPatientRepository};
    /// use std::sync::Arc;
    /// let svc = PatientService::new(Arc::new(InMemoryPatientRepository::default()));
    /// let dto = tokio_test::block_on(svc.save_dto(PatientDto::new("Sara", "25"))).unwrap();
    /// assert_eq!(dto.id, Some(1));
    /// assert_eq!(dto.age.as_deref(), Some("25"));
    /// ```
    #[instrument(skip(self, dto), fields(id = ?dto.id))]
    pub async fn save_dto(&self, dto: PatientDto) -> Result<PatientDto, PatientError> {
        // Some in, Some out
        let patient = mapper::to_entity(Some(dto)).unwrap_or_default();
        let saved = self.create(patient).await?;
        Ok(mapper::to_dto(Some(saved)).unwrap_or_default())
    }
}

impl<R: PatientRepository> Clone for PatientService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}
