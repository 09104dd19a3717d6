use uuid::Uuid;

use pediguide_core::models::submission::{Submission, SubmissionStatus};
use pediguide_core::storage_keys;

use crate::bucket::Bucket;
use crate::error::StorageError;
use crate::BoxFuture;

pub trait SubmissionStore: Send + Sync {
    /// Insert or overwrite a submission.
    fn save_submission<'a>(&'a self, submission: &'a Submission) -> BoxFuture<'a, Result<(), StorageError>>;

    /// `StorageError::NotFound` when the id is unknown.
    fn get_submission(&self, id: Uuid) -> BoxFuture<'_, Result<Submission, StorageError>>;

    /// Every stored submission, in no particular order.
    fn all_submissions(&self) -> BoxFuture<'_, Result<Vec<Submission>, StorageError>>;

    /// Newest first.
    fn list_submissions(&self) -> BoxFuture<'_, Result<Vec<Submission>, StorageError>> {
        Box::pin(async move {
            let mut submissions = self.all_submissions().await?;
            submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(submissions)
        })
    }

    fn set_status(
        &self,
        id: Uuid,
        status: SubmissionStatus,
    ) -> BoxFuture<'_, Result<Submission, StorageError>> {
        Box::pin(async move {
            let mut submission = self.get_submission(id).await?;
            submission.status = status;
            self.save_submission(&submission).await?;
            tracing::info!(submission_id = %id, status = %status, "submission status updated");
            Ok(submission)
        })
    }
}

/// One JSON object per submission under `submissions/`.
pub struct S3SubmissionStore {
    bucket: Bucket,
}

impl S3SubmissionStore {
    pub fn new(bucket: Bucket) -> Self {
        Self { bucket }
    }
}

impl SubmissionStore for S3SubmissionStore {
    fn save_submission<'a>(&'a self, submission: &'a Submission) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.bucket
                .put_json(&storage_keys::submission(submission.id), submission)
                .await
        })
    }

    fn get_submission(&self, id: Uuid) -> BoxFuture<'_, Result<Submission, StorageError>> {
        Box::pin(async move { self.bucket.get_json(&storage_keys::submission(id)).await })
    }

    fn all_submissions(&self) -> BoxFuture<'_, Result<Vec<Submission>, StorageError>> {
        Box::pin(async move { self.bucket.get_all_json(storage_keys::SUBMISSIONS_PREFIX).await })
    }
}
