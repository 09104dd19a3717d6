use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::{FieldKey, FieldOption, FieldSchema, FieldType};

/// Schema version stamped on every normalized configuration.
pub const CURRENT_VERSION: u32 = 1;

/// The questionnaire as configured by doctors.
///
/// There is no mutation API: a new value comes from the configuration
/// validator or from [`default_form_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormConfig {
    pub version: u32,
    pub fields: Vec<FieldSchema>,
}

impl FormConfig {
    pub fn field(&self, key: FieldKey) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Fields shown to parents, in configuration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|f| f.is_active)
    }

    pub fn is_required(&self, key: FieldKey) -> bool {
        self.field(key).is_some_and(|f| f.is_active && f.required)
    }
}

/// The configuration served before any doctor has saved one.
pub fn default_form_config() -> FormConfig {
    DEFAULT_FORM_CONFIG.clone()
}

const MULTIPLE_CHOICES: &str = "Plusieurs choix possibles.";

static DEFAULT_FORM_CONFIG: LazyLock<FormConfig> = LazyLock::new(|| {
    let question = |key, label: &str, field_type, required, order| FieldSchema {
        key,
        label: label.to_string(),
        field_type,
        required,
        order,
        is_active: true,
        help_text: None,
        options: None,
    };
    let choices = |labels: &[&str]| Some(labels.iter().map(|l| FieldOption::labelled(l)).collect());

    FormConfig {
        version: CURRENT_VERSION,
        fields: vec![
            question(FieldKey::ChildFirstName, "Prénom de l'enfant", FieldType::Text, true, 1),
            question(FieldKey::ChildLastName, "Nom de l'enfant", FieldType::Text, true, 2),
            question(FieldKey::ChildBirthDate, "Date de naissance", FieldType::Date, true, 3),
            question(
                FieldKey::ConsultationReason,
                "Motif de consultation",
                FieldType::Textarea,
                true,
                4,
            ),
            FieldSchema {
                help_text: Some(MULTIPLE_CHOICES.to_string()),
                options: choices(&[
                    "Il mange moins que d'habitude",
                    "Il dort moins ou plus que d'habitude",
                    "Il est plus fatigué",
                ]),
                ..question(
                    FieldKey::BehaviorChanges,
                    "Changements de comportement",
                    FieldType::Checkbox,
                    false,
                    1,
                )
            },
            FieldSchema {
                help_text: Some(MULTIPLE_CHOICES.to_string()),
                options: choices(&["Fièvre", "Toux", "Vomissements"]),
                ..question(
                    FieldKey::ClinicalSigns,
                    "Signes cliniques observés",
                    FieldType::Checkbox,
                    false,
                    2,
                )
            },
            FieldSchema {
                options: choices(&[
                    "Aujourd'hui",
                    "Depuis 1 à 2 jours",
                    "Depuis plusieurs jours",
                    "Depuis plus d'une semaine",
                ]),
                ..question(FieldKey::Duration, "Depuis quand ?", FieldType::Radio, true, 1)
            },
            FieldSchema {
                options: choices(&[
                    "Peu inquiétant",
                    "Moyennement inquiétant",
                    "Très inquiétant",
                ]),
                ..question(
                    FieldKey::WorryLevel,
                    "Niveau d'inquiétude",
                    FieldType::Radio,
                    true,
                    2,
                )
            },
            FieldSchema {
                help_text: Some(MULTIPLE_CHOICES.to_string()),
                options: choices(&[
                    "J'ai pris la température",
                    "J'ai donné un médicament",
                    "Je n'ai rien fait pour le moment",
                ]),
                ..question(
                    FieldKey::ActionsTaken,
                    "Actions déjà réalisées",
                    FieldType::Checkbox,
                    false,
                    1,
                )
            },
            question(
                FieldKey::AdditionalNotes,
                "Message complémentaire",
                FieldType::Textarea,
                false,
                1,
            ),
        ],
    }
});
