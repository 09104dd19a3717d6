use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answers::Answers;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubmissionStatus {
    #[default]
    New,
    InReview,
    Completed,
}

impl SubmissionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InReview => "in_review",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in_review" => Ok(Self::InReview),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

/// A stored questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Submission {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    #[serde(flatten)]
    pub answers: Answers,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub doctor_id: Option<Uuid>,
}

impl Submission {
    pub fn new(answers: Answers) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: jiff::Timestamp::now(),
            answers,
            status: SubmissionStatus::New,
            doctor_id: None,
        }
    }
}

/// Row shown in the doctor dashboard list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionSummary {
    pub id: Uuid,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub consultation_reason: String,
    pub submitted_at: jiff::Timestamp,
    pub status: SubmissionStatus,
}

impl From<&Submission> for SubmissionSummary {
    fn from(s: &Submission) -> Self {
        Self {
            id: s.id,
            patient_first_name: s.answers.child_first_name.clone(),
            patient_last_name: s.answers.child_last_name.clone(),
            consultation_reason: s.answers.consultation_reason.clone(),
            submitted_at: s.created_at,
            status: s.status,
        }
    }
}
