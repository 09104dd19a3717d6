use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The closed set of questions the system understands.
///
/// Variant order is the canonical enumeration order: it drives the default
/// configuration and the order in which missing keys are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FieldKey {
    ChildFirstName,
    ChildLastName,
    ChildBirthDate,
    ConsultationReason,
    BehaviorChanges,
    ClinicalSigns,
    Duration,
    WorryLevel,
    ActionsTaken,
    AdditionalNotes,
}

impl FieldKey {
    pub const ALL: [Self; 10] = [
        Self::ChildFirstName,
        Self::ChildLastName,
        Self::ChildBirthDate,
        Self::ConsultationReason,
        Self::BehaviorChanges,
        Self::ClinicalSigns,
        Self::Duration,
        Self::WorryLevel,
        Self::ActionsTaken,
        Self::AdditionalNotes,
    ];

    /// Wire name, as used in configuration payloads and submissions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChildFirstName => "childFirstName",
            Self::ChildLastName => "childLastName",
            Self::ChildBirthDate => "childBirthDate",
            Self::ConsultationReason => "consultationReason",
            Self::BehaviorChanges => "behaviorChanges",
            Self::ClinicalSigns => "clinicalSigns",
            Self::Duration => "duration",
            Self::WorryLevel => "worryLevel",
            Self::ActionsTaken => "actionsTaken",
            Self::AdditionalNotes => "additionalNotes",
        }
    }

    /// Question types a doctor may choose for this key.
    pub const fn allowed_types(self) -> &'static [FieldType] {
        match self {
            Self::ChildFirstName | Self::ChildLastName => &[FieldType::Text],
            Self::ChildBirthDate => &[FieldType::Date],
            Self::ConsultationReason | Self::AdditionalNotes => {
                &[FieldType::Text, FieldType::Textarea]
            }
            Self::BehaviorChanges | Self::ClinicalSigns | Self::ActionsTaken => {
                &[FieldType::Checkbox]
            }
            Self::Duration | Self::WorryLevel => &[FieldType::Radio, FieldType::Select],
        }
    }

    pub fn allows(self, field_type: FieldType) -> bool {
        self.allowed_types().contains(&field_type)
    }

    /// Shape of the stored answer. Fixed per key, since no key's allowed
    /// types mix single and multiple answers.
    pub const fn shape(self) -> AnswerShape {
        match self {
            Self::BehaviorChanges | Self::ClinicalSigns | Self::ActionsTaken => AnswerShape::List,
            _ => AnswerShape::Text,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::UnknownFieldKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FieldType {
    Text,
    Textarea,
    Date,
    Checkbox,
    Radio,
    Select,
}

impl FieldType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
        }
    }

    /// Choice types carry an `options` list.
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio | Self::Select)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            "date" => Ok(Self::Date),
            "checkbox" => Ok(Self::Checkbox),
            "radio" => Ok(Self::Radio),
            "select" => Ok(Self::Select),
            other => Err(CoreError::UnknownFieldType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerShape {
    Text,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    /// An option whose stored value is its label.
    pub fn labelled(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: label.to_string(),
        }
    }
}

/// Definition of one question of the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldSchema {
    pub key: FieldKey,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Display rank within the field's wizard step.
    pub order: i32,
    pub is_active: bool,
    pub help_text: Option<String>,
    /// Present only for choice types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

impl FieldSchema {
    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Whether `value` is one of this field's option values.
    pub fn has_option_value(&self, value: &str) -> bool {
        self.options().iter().any(|o| o.value == value)
    }
}
