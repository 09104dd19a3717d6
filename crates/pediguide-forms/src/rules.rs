//! One validation rule per question.
//!
//! Each rule receives the current answer and returns `None` when it is valid
//! or the message to show next to the field.

use jiff::civil::Date;

use pediguide_core::models::answers::AnswerValue;
use pediguide_core::models::field::FieldKey;

/// Minimum trimmed length of the consultation reason, in characters.
pub const CONSULTATION_REASON_MIN_CHARS: usize = 5;

/// Today's date in the server's local time zone.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

/// Apply the rule registered for `key`.
///
/// Multi-choice questions and the free notes have no rule of their own:
/// whether they must be filled is decided by the configuration.
pub fn check(key: FieldKey, value: AnswerValue<'_>, today: Date) -> Option<String> {
    let AnswerValue::Text(text) = value else {
        return None;
    };

    match key {
        FieldKey::ChildFirstName => required(text, "child first name is required."),
        FieldKey::ChildLastName => required(text, "child last name is required."),
        FieldKey::ChildBirthDate => check_birth_date(text, today),
        FieldKey::ConsultationReason => check_consultation_reason(text),
        FieldKey::Duration => required(text, "please select a duration."),
        FieldKey::WorryLevel => required(text, "please indicate your worry level."),
        FieldKey::BehaviorChanges
        | FieldKey::ClinicalSigns
        | FieldKey::ActionsTaken
        | FieldKey::AdditionalNotes => None,
    }
}

/// Birth date must be a calendar date no later than `today`.
pub fn check_birth_date(value: &str, today: Date) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("child birth date is required.".to_string());
    }

    match parse_iso_date(value) {
        None => Some("child birth date is invalid.".to_string()),
        Some(date) if date > today => Some("child birth date cannot be in the future.".to_string()),
        Some(_) => None,
    }
}

/// Strict `YYYY-MM-DD`. No sign, no time part, no compact form.
pub fn parse_iso_date(value: &str) -> Option<Date> {
    let shaped = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    Date::strptime("%Y-%m-%d", value).ok()
}

pub fn check_consultation_reason(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("consultation reason is required.".to_string());
    }
    if value.chars().count() < CONSULTATION_REASON_MIN_CHARS {
        return Some(format!(
            "please describe the reason (at least {CONSULTATION_REASON_MIN_CHARS} characters)."
        ));
    }
    None
}

/// The wizard's final consent box must be ticked.
pub fn check_consent(consent: bool) -> Option<String> {
    (!consent).then(|| "please give your consent before submitting.".to_string())
}

fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}
