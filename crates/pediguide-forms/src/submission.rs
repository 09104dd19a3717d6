use jiff::civil::Date;

use pediguide_core::models::answers::{AnswerValue, Answers};
use pediguide_core::models::field::FieldSchema;
use pediguide_core::models::form_config::FormConfig;

use crate::error::{FieldError, SubmissionErrors};
use crate::rules;

/// Check a parent's answers against the active configuration.
///
/// Only active fields are checked. On success the answers come back trimmed,
/// with answers to inactive fields cleared, ready to be stored.
pub fn validate_submission(
    answers: Answers,
    config: &FormConfig,
    today: Date,
) -> Result<Answers, SubmissionErrors> {
    let mut answers = answers.trimmed();
    let mut errors = Vec::new();

    for field in &config.fields {
        if !field.is_active {
            answers.clear(field.key);
            continue;
        }
        if let Some(message) = check_field(field, answers.get(field.key), today) {
            errors.push(FieldError {
                key: field.key,
                message,
            });
        }
    }

    if errors.is_empty() {
        Ok(answers)
    } else {
        Err(SubmissionErrors(errors))
    }
}

/// Check one answer against its configured field.
///
/// Empty answers only fail when the field is required. Filled answers go
/// through the key's rule, then choice answers must match a configured option.
pub fn check_field(field: &FieldSchema, value: AnswerValue<'_>, today: Date) -> Option<String> {
    if value.is_empty() {
        if !field.required {
            return None;
        }
        return Some(
            rules::check(field.key, value, today)
                .unwrap_or_else(|| format!("{} is required.", field.label)),
        );
    }

    if let Some(message) = rules::check(field.key, value, today) {
        return Some(message);
    }

    if field.field_type.is_choice() {
        let known = match value {
            AnswerValue::Text(v) => field.has_option_value(v),
            AnswerValue::List(items) => items.iter().all(|v| field.has_option_value(v)),
        };
        if !known {
            return Some(format!("invalid choice for {}.", field.key));
        }
    }

    None
}
