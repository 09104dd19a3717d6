//! The five-step intake wizard.

use std::fmt;

use jiff::civil::Date;

use pediguide_core::models::field::FieldKey;
use pediguide_core::models::form_config::FormConfig;

use crate::rules;
use crate::state::FormState;
use crate::submission::check_field;

pub const STEP_COUNT: u8 = 5;

/// The step that carries the consent box.
pub const CONSENT_STEP: u8 = 5;

/// Which wizard step asks a question.
pub const fn step_of(key: FieldKey) -> u8 {
    match key {
        FieldKey::ChildFirstName
        | FieldKey::ChildLastName
        | FieldKey::ChildBirthDate
        | FieldKey::ConsultationReason => 1,
        FieldKey::BehaviorChanges | FieldKey::ClinicalSigns => 2,
        FieldKey::Duration | FieldKey::WorryLevel => 3,
        FieldKey::ActionsTaken => 4,
        FieldKey::AdditionalNotes => 5,
    }
}

/// A slot on a wizard page: a configured question or the consent box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardField {
    Question(FieldKey),
    Consent,
}

impl WizardField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Question(key) => key.as_str(),
            Self::Consent => "consent",
        }
    }
}

impl fmt::Display for WizardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepError {
    pub field: WizardField,
    pub message: String,
}

/// Active questions of a step in display order: by configured `order`, ties
/// broken by position in the configuration.
pub fn step_questions(step: u8, config: &FormConfig) -> Vec<FieldKey> {
    let mut fields: Vec<_> = config
        .active_fields()
        .filter(|f| step_of(f.key) == step)
        .collect();
    fields.sort_by_key(|f| f.order);
    fields.into_iter().map(|f| f.key).collect()
}

/// Slots that must be filled before leaving `step`.
pub fn required_fields(step: u8, config: &FormConfig) -> Vec<WizardField> {
    let mut required: Vec<WizardField> = step_questions(step, config)
        .into_iter()
        .filter(|key| config.is_required(*key))
        .map(WizardField::Question)
        .collect();
    if step == CONSENT_STEP {
        required.push(WizardField::Consent);
    }
    required
}

/// Errors for the slots on one step only, so the wizard can advance step by
/// step without reporting problems on pages the parent has not reached.
pub fn validate_step(state: &FormState, step: u8, config: &FormConfig, today: Date) -> Vec<StepError> {
    let mut errors: Vec<StepError> = step_questions(step, config)
        .into_iter()
        .filter_map(|key| {
            let field = config.field(key)?;
            let message = check_field(field, state.answers.get(key), today)?;
            Some(StepError {
                field: WizardField::Question(key),
                message,
            })
        })
        .collect();

    if step == CONSENT_STEP
        && let Some(message) = rules::check_consent(state.consent)
    {
        errors.push(StepError {
            field: WizardField::Consent,
            message,
        });
    }
    errors
}

/// The first step that still has errors, if any.
pub fn first_invalid_step(state: &FormState, config: &FormConfig, today: Date) -> Option<u8> {
    (1..=STEP_COUNT).find(|step| !validate_step(state, *step, config, today).is_empty())
}
