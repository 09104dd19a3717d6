use std::collections::HashSet;

use serde_json::Value;

use pediguide_core::models::field::{FieldKey, FieldOption, FieldSchema, FieldType};
use pediguide_core::models::form_config::{FormConfig, CURRENT_VERSION};

use crate::error::ConfigErrors;

/// Validate and normalize an untrusted configuration payload.
///
/// All problems are collected in a single pass so the doctor can fix them
/// from one response. The order of checks below is the order errors are
/// reported in. Malformed input never panics; it is reported as errors.
pub fn validate_form_config(payload: &Value) -> Result<FormConfig, ConfigErrors> {
    let candidates = payload
        .get("fields")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut errors = Vec::new();
    if candidates.is_empty() {
        errors.push("configuration must contain questions.".to_string());
    }

    let mut seen = HashSet::new();
    let fields: Vec<FieldSchema> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| normalize_field(index, candidate, &mut seen, &mut errors))
        .collect();

    let missing: Vec<&str> = FieldKey::ALL
        .iter()
        .map(|key| key.as_str())
        .filter(|key| !seen.contains(*key))
        .collect();
    if !missing.is_empty() {
        errors.push(format!("missing questions: {}.", missing.join(", ")));
    }

    if errors.is_empty() {
        Ok(FormConfig {
            version: CURRENT_VERSION,
            fields,
        })
    } else {
        Err(ConfigErrors(errors))
    }
}

/// Check one candidate field, recording errors as it goes. Returns the
/// normalized field when its key and type could be resolved; the result only
/// matters when the whole configuration turns out valid.
fn normalize_field(
    index: usize,
    candidate: &Value,
    seen: &mut HashSet<String>,
    errors: &mut Vec<String>,
) -> Option<FieldSchema> {
    let raw_key = key_text(candidate.get("key"));
    let label = text(candidate.get("label"));
    let type_name = text(candidate.get("type"));
    let required = candidate
        .get("required")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let is_active = candidate
        .get("isActive")
        .and_then(Value::as_bool)
        .unwrap_or(true);
    let position = i32::try_from(index + 1).unwrap_or(i32::MAX);
    let order = candidate
        .get("order")
        .and_then(numeric_order)
        .unwrap_or(position);
    let help_text = Some(text(candidate.get("helpText"))).filter(|h| !h.is_empty());

    let key = raw_key.parse::<FieldKey>().ok();
    if key.is_none() {
        errors.push(format!("invalid question key: {raw_key}."));
    }

    if !seen.insert(raw_key.clone()) {
        errors.push(format!("duplicate question key: {raw_key}."));
    }

    if label.is_empty() {
        errors.push(format!("question {position} must have a label."));
    }

    let field_type = type_name.parse::<FieldType>().ok();
    let type_allowed = matches!((key, field_type), (Some(k), Some(t)) if k.allows(t));
    if !type_allowed {
        errors.push(format!("invalid type for question {raw_key}."));
    }

    let options = match field_type {
        Some(t) if t.is_choice() => {
            let options = normalize_options(candidate.get("options"));
            if is_active && options.is_empty() {
                errors.push(format!("add at least one option for {raw_key}."));
            }
            Some(options)
        }
        _ => None,
    };

    Some(FieldSchema {
        key: key?,
        label,
        field_type: field_type?,
        required,
        order,
        is_active,
        help_text,
        options,
    })
}

/// Trim option labels, drop blank ones, and default each value to its label.
fn normalize_options(raw: Option<&Value>) -> Vec<FieldOption> {
    raw.and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .filter_map(|option| {
            let label = text(option.get("label"));
            if label.is_empty() {
                return None;
            }
            let value = Some(text(option.get("value")))
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| label.clone());
            Some(FieldOption { label, value })
        })
        .collect()
}

/// Any JSON number is a usable order. Floats such as `7.0` come from
/// non-JS clients; fractional ones are rounded to the nearest integer.
/// Values outside `i32` fall back to the field's position.
fn numeric_order(value: &Value) -> Option<i32> {
    if let Some(order) = value.as_i64() {
        return i32::try_from(order).ok();
    }
    let order = value.as_f64()?.round();
    (order >= f64::from(i32::MIN) && order <= f64::from(i32::MAX)).then_some(order as i32)
}

/// Trimmed string content; anything that is not a string reads as empty.
fn text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// How a candidate key is named in error messages.
fn key_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "(missing)".to_string(),
    }
}
