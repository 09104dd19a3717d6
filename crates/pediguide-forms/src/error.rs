use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use pediguide_core::models::field::FieldKey;

/// Every problem found in a candidate configuration, in detection order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join(" "))]
pub struct ConfigErrors(pub Vec<String>);

impl ConfigErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub key: FieldKey,
    pub message: String,
}

/// Field-level problems in a submission, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission has {} invalid field(s)", .0.len())]
pub struct SubmissionErrors(pub Vec<FieldError>);

impl SubmissionErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn message_for(&self, key: FieldKey) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.message.as_str())
    }
}
