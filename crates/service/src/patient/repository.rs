use async_trait::async_trait;

use super::domain::Patient;
use super::errors::PatientError;

/// Key-based storage for patients.
///
/// `save` assigns an id when the record has none and overwrites the stored
/// row when it has one. A preset id with no stored row is treated like an
/// unsaved record and receives a fresh id. `delete_by_id` is idempotent.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, PatientError>;
    async fn find_all(&self) -> Result<Vec<Patient>, PatientError>;
    async fn save(&self, patient: Patient) -> Result<Patient, PatientError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), PatientError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, PatientError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    struct Table {
        rows: BTreeMap<i64, Patient>,
        next_id: i64,
    }

    pub struct InMemoryPatientRepository {
        table: Mutex<Table>,
    }

    impl Default for InMemoryPatientRepository {
        fn default() -> Self {
            Self { table: Mutex::new(Table { rows: BTreeMap::new(), next_id: 1 }) }
        }
    }

    impl InMemoryPatientRepository {
        fn lock(&self) -> Result<MutexGuard<'_, Table>, PatientError> {
            self.table.lock().map_err(|_| PatientError::Repository("in-memory table poisoned".into()))
        }
    }

    #[async_trait]
    impl PatientRepository for InMemoryPatientRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, PatientError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Patient>, PatientError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn save(&self, mut patient: Patient) -> Result<Patient, PatientError> {
            let mut table = self.lock()?;
            let id = match patient.id {
                Some(id) if table.rows.contains_key(&id) => id,
                _ => {
                    let id = table.next_id;
                    table.next_id += 1;
                    id
                }
            };
            patient.id = Some(id);
            table.rows.insert(id, patient.clone());
            Ok(patient)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), PatientError> {
            self.lock()?.rows.remove(&id);
            Ok(())
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, PatientError> {
            Ok(self.lock()?.rows.contains_key(&id))
        }
    }
}
