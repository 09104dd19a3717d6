use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::FieldKey;

/// A parent's answers, one slot per recognized question.
///
/// Missing keys deserialize to empty answers; shape errors (a list where a
/// string is expected) are rejected by serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Answers {
    pub child_first_name: String,
    pub child_last_name: String,
    /// `YYYY-MM-DD`.
    pub child_birth_date: String,
    pub consultation_reason: String,
    pub behavior_changes: Vec<String>,
    pub clinical_signs: Vec<String>,
    pub duration: String,
    pub worry_level: String,
    pub actions_taken: Vec<String>,
    pub additional_notes: String,
}

/// Borrowed view of a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl AnswerValue<'_> {
    /// Blank text and empty lists count as unanswered.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::List(items) => items.is_empty(),
        }
    }
}

impl Answers {
    pub fn get(&self, key: FieldKey) -> AnswerValue<'_> {
        match key {
            FieldKey::ChildFirstName => AnswerValue::Text(&self.child_first_name),
            FieldKey::ChildLastName => AnswerValue::Text(&self.child_last_name),
            FieldKey::ChildBirthDate => AnswerValue::Text(&self.child_birth_date),
            FieldKey::ConsultationReason => AnswerValue::Text(&self.consultation_reason),
            FieldKey::BehaviorChanges => AnswerValue::List(&self.behavior_changes),
            FieldKey::ClinicalSigns => AnswerValue::List(&self.clinical_signs),
            FieldKey::Duration => AnswerValue::Text(&self.duration),
            FieldKey::WorryLevel => AnswerValue::Text(&self.worry_level),
            FieldKey::ActionsTaken => AnswerValue::List(&self.actions_taken),
            FieldKey::AdditionalNotes => AnswerValue::Text(&self.additional_notes),
        }
    }

    /// Reset one answer to empty.
    pub fn clear(&mut self, key: FieldKey) {
        match key {
            FieldKey::ChildFirstName => self.child_first_name.clear(),
            FieldKey::ChildLastName => self.child_last_name.clear(),
            FieldKey::ChildBirthDate => self.child_birth_date.clear(),
            FieldKey::ConsultationReason => self.consultation_reason.clear(),
            FieldKey::BehaviorChanges => self.behavior_changes.clear(),
            FieldKey::ClinicalSigns => self.clinical_signs.clear(),
            FieldKey::Duration => self.duration.clear(),
            FieldKey::WorryLevel => self.worry_level.clear(),
            FieldKey::ActionsTaken => self.actions_taken.clear(),
            FieldKey::AdditionalNotes => self.additional_notes.clear(),
        }
    }

    /// Trim every text answer and drop blank list entries.
    pub fn trimmed(mut self) -> Self {
        for text in [
            &mut self.child_first_name,
            &mut self.child_last_name,
            &mut self.child_birth_date,
            &mut self.consultation_reason,
            &mut self.duration,
            &mut self.worry_level,
            &mut self.additional_notes,
        ] {
            *text = text.trim().to_string();
        }
        for list in [
            &mut self.behavior_changes,
            &mut self.clinical_signs,
            &mut self.actions_taken,
        ] {
            list.retain(|item| !item.trim().is_empty());
        }
        self
    }
}
