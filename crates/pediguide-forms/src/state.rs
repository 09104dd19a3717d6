use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pediguide_core::models::answers::Answers;

/// Everything a parent has entered so far in the intake wizard.
///
/// Immutable: edits produce a new state via [`FormState::with_patch`], and
/// `FormState::default()` is the blank form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormState {
    #[serde(flatten)]
    pub answers: Answers,
    /// Wizard-only; never stored with the submission.
    #[serde(default)]
    pub consent: bool,
}

/// A partial edit. `None` leaves the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct FormPatch {
    pub child_first_name: Option<String>,
    pub child_last_name: Option<String>,
    pub child_birth_date: Option<String>,
    pub consultation_reason: Option<String>,
    pub behavior_changes: Option<Vec<String>>,
    pub clinical_signs: Option<Vec<String>>,
    pub duration: Option<String>,
    pub worry_level: Option<String>,
    pub actions_taken: Option<Vec<String>>,
    pub additional_notes: Option<String>,
    pub consent: Option<bool>,
}

impl FormState {
    pub fn with_patch(&self, patch: FormPatch) -> Self {
        let current = &self.answers;
        Self {
            answers: Answers {
                child_first_name: patch
                    .child_first_name
                    .unwrap_or_else(|| current.child_first_name.clone()),
                child_last_name: patch
                    .child_last_name
                    .unwrap_or_else(|| current.child_last_name.clone()),
                child_birth_date: patch
                    .child_birth_date
                    .unwrap_or_else(|| current.child_birth_date.clone()),
                consultation_reason: patch
                    .consultation_reason
                    .unwrap_or_else(|| current.consultation_reason.clone()),
                behavior_changes: patch
                    .behavior_changes
                    .unwrap_or_else(|| current.behavior_changes.clone()),
                clinical_signs: patch
                    .clinical_signs
                    .unwrap_or_else(|| current.clinical_signs.clone()),
                duration: patch.duration.unwrap_or_else(|| current.duration.clone()),
                worry_level: patch
                    .worry_level
                    .unwrap_or_else(|| current.worry_level.clone()),
                actions_taken: patch
                    .actions_taken
                    .unwrap_or_else(|| current.actions_taken.clone()),
                additional_notes: patch
                    .additional_notes
                    .unwrap_or_else(|| current.additional_notes.clone()),
            },
            consent: patch.consent.unwrap_or(self.consent),
        }
    }

    /// The answers to submit, without the consent flag.
    pub fn into_answers(self) -> Answers {
        self.answers
    }
}
