use uuid::Uuid;

use pediguide_core::models::doctor::Doctor;
use pediguide_core::storage_keys;

use crate::bucket::Bucket;
use crate::error::StorageError;
use crate::BoxFuture;

pub trait DoctorStore: Send + Sync {
    /// Insert or overwrite a doctor.
    fn save_doctor<'a>(&'a self, doctor: &'a Doctor) -> BoxFuture<'a, Result<(), StorageError>>;

    /// `StorageError::NotFound` when the id is unknown.
    fn get_doctor(&self, id: Uuid) -> BoxFuture<'_, Result<Doctor, StorageError>>;

    fn all_doctors(&self) -> BoxFuture<'_, Result<Vec<Doctor>, StorageError>>;

    /// Store a new doctor. RPPS number and email must both be unused.
    ///
    /// The uniqueness check and the write are separate operations; two
    /// concurrent registrations with the same email can both succeed.
    fn register_doctor(&self, doctor: Doctor) -> BoxFuture<'_, Result<Doctor, StorageError>> {
        Box::pin(async move {
            let existing = self.all_doctors().await?;
            if existing
                .iter()
                .any(|d| d.rpps == doctor.rpps || d.email == doctor.email)
            {
                return Err(StorageError::Conflict(
                    "RPPS number or email already in use".to_string(),
                ));
            }
            self.save_doctor(&doctor).await?;
            tracing::info!(doctor_id = %doctor.id, "doctor registered");
            Ok(doctor)
        })
    }

    fn find_doctor_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, Result<Option<Doctor>, StorageError>> {
        Box::pin(async move {
            let doctors = self.all_doctors().await?;
            Ok(doctors.into_iter().find(|d| d.email == email))
        })
    }
}

/// One JSON object per doctor under `doctors/`.
pub struct S3DoctorStore {
    bucket: Bucket,
}

impl S3DoctorStore {
    pub fn new(bucket: Bucket) -> Self {
        Self { bucket }
    }
}

impl DoctorStore for S3DoctorStore {
    fn save_doctor<'a>(&'a self, doctor: &'a Doctor) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move { self.bucket.put_json(&storage_keys::doctor(doctor.id), doctor).await })
    }

    fn get_doctor(&self, id: Uuid) -> BoxFuture<'_, Result<Doctor, StorageError>> {
        Box::pin(async move { self.bucket.get_json(&storage_keys::doctor(id)).await })
    }

    fn all_doctors(&self) -> BoxFuture<'_, Result<Vec<Doctor>, StorageError>> {
        Box::pin(async move { self.bucket.get_all_json(storage_keys::DOCTORS_PREFIX).await })
    }
}
