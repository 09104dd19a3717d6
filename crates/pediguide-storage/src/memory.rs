use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;
use uuid::Uuid;

use pediguide_core::models::doctor::Doctor;
use pediguide_core::models::form_config::FormConfig;
use pediguide_core::models::submission::Submission;
use pediguide_core::storage_keys;

use crate::config_store::ConfigStore;
use crate::doctors::DoctorStore;
use crate::error::StorageError;
use crate::submissions::SubmissionStore;
use crate::BoxFuture;

/// Process-local backend for every store. Used by tests and by local runs
/// with `PEDIGUIDE_STORAGE=memory`; nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    config: RwLock<Option<FormConfig>>,
    config_writes: AtomicUsize,
    submissions: RwLock<HashMap<Uuid, Submission>>,
    doctors: RwLock<HashMap<Uuid, Doctor>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the configuration has been written.
    pub fn config_writes(&self) -> usize {
        self.config_writes.load(Ordering::SeqCst)
    }
}

impl ConfigStore for MemoryStore {
    fn load_config(&self) -> BoxFuture<'_, Result<Option<FormConfig>, StorageError>> {
        Box::pin(async move { Ok(self.config.read().await.clone()) })
    }

    fn save_config<'a>(&'a self, config: &'a FormConfig) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            *self.config.write().await = Some(config.clone());
            self.config_writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}

impl SubmissionStore for MemoryStore {
    fn save_submission<'a>(&'a self, submission: &'a Submission) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.submissions
                .write()
                .await
                .insert(submission.id, submission.clone());
            Ok(())
        })
    }

    fn get_submission(&self, id: Uuid) -> BoxFuture<'_, Result<Submission, StorageError>> {
        Box::pin(async move {
            self.submissions
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound {
                    key: storage_keys::submission(id),
                })
        })
    }

    fn all_submissions(&self) -> BoxFuture<'_, Result<Vec<Submission>, StorageError>> {
        Box::pin(async move { Ok(self.submissions.read().await.values().cloned().collect()) })
    }
}

impl DoctorStore for MemoryStore {
    fn save_doctor<'a>(&'a self, doctor: &'a Doctor) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.doctors.write().await.insert(doctor.id, doctor.clone());
            Ok(())
        })
    }

    fn get_doctor(&self, id: Uuid) -> BoxFuture<'_, Result<Doctor, StorageError>> {
        Box::pin(async move {
            self.doctors
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound {
                    key: storage_keys::doctor(id),
                })
        })
    }

    fn all_doctors(&self) -> BoxFuture<'_, Result<Vec<Doctor>, StorageError>> {
        Box::pin(async move { Ok(self.doctors.read().await.values().cloned().collect()) })
    }
}
