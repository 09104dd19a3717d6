use jiff::civil::date;

use pediguide_core::models::field::FieldKey;
use pediguide_core::models::form_config::default_form_config;
use pediguide_forms::state::{FormPatch, FormState};
use pediguide_forms::wizard::{
    first_invalid_step, required_fields, step_of, step_questions, validate_step, WizardField,
};

#[test]
fn every_key_belongs_to_a_step() {
    for key in FieldKey::ALL {
        assert!((1..=5).contains(&step_of(key)));
    }
}

#[test]
fn required_fields_follow_the_configuration() {
    let config = default_form_config();
    assert_eq!(
        required_fields(1, &config),
        vec![
            WizardField::Question(FieldKey::ChildFirstName),
            WizardField::Question(FieldKey::ChildLastName),
            WizardField::Question(FieldKey::ChildBirthDate),
            WizardField::Question(FieldKey::ConsultationReason),
        ]
    );
    assert!(required_fields(2, &config).is_empty());
    assert_eq!(
        required_fields(3, &config),
        vec![
            WizardField::Question(FieldKey::Duration),
            WizardField::Question(FieldKey::WorryLevel),
        ]
    );
    assert_eq!(required_fields(5, &config), vec![WizardField::Consent]);
}

#[test]
fn step_questions_sort_by_order_then_position() {
    let mut config = default_form_config();
    for field in &mut config.fields {
        match field.key {
            FieldKey::WorryLevel => field.order = 0,
            FieldKey::Duration => field.order = 0,
            _ => {}
        }
    }
    assert_eq!(
        step_questions(3, &config),
        vec![FieldKey::Duration, FieldKey::WorryLevel]
    );

    config.fields.iter_mut().find(|f| f.key == FieldKey::WorryLevel).unwrap().order = -1;
    assert_eq!(
        step_questions(3, &config),
        vec![FieldKey::WorryLevel, FieldKey::Duration]
    );
}

#[test]
fn step_validation_only_reports_that_step() {
    let config = default_form_config();
    let today = date(2026, 1, 1);
    let state = FormState::default();

    let step1 = validate_step(&state, 1, &config, today);
    assert_eq!(step1.len(), 4);
    assert!(validate_step(&state, 2, &config, today).is_empty());

    let step3: Vec<_> = validate_step(&state, 3, &config, today)
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(
        step3,
        vec![
            WizardField::Question(FieldKey::Duration),
            WizardField::Question(FieldKey::WorryLevel),
        ]
    );

    let step5 = validate_step(&state, 5, &config, today);
    assert_eq!(step5.len(), 1);
    assert_eq!(step5[0].field.as_str(), "consent");
}

#[test]
fn patches_produce_new_states() {
    let blank = FormState::default();
    let filled = blank.with_patch(FormPatch {
        child_first_name: Some("Noah".to_string()),
        consultation_reason: Some("flu".to_string()),
        ..FormPatch::default()
    });

    assert_eq!(blank, FormState::default());
    assert_eq!(filled.answers.child_first_name, "Noah");

    let today = date(2026, 1, 1);
    let errors = validate_step(&filled, 1, &default_form_config(), today);
    let reason = errors
        .iter()
        .find(|e| e.field == WizardField::Question(FieldKey::ConsultationReason))
        .unwrap();
    assert_eq!(reason.message, "please describe the reason (at least 5 characters).");

    let again = filled.with_patch(FormPatch {
        consent: Some(true),
        ..FormPatch::default()
    });
    assert_eq!(again.answers.child_first_name, "Noah");
    assert!(again.consent);
}

#[test]
fn walking_the_wizard_to_the_end() {
    let config = default_form_config();
    let today = date(2026, 1, 1);

    let state = FormState::default();
    assert_eq!(first_invalid_step(&state, &config, today), Some(1));

    let state = state.with_patch(FormPatch {
        child_first_name: Some("Ines".to_string()),
        child_last_name: Some("Bernard".to_string()),
        child_birth_date: Some("2018-08-19".to_string()),
        consultation_reason: Some("Éruption cutanée".to_string()),
        ..FormPatch::default()
    });
    assert_eq!(first_invalid_step(&state, &config, today), Some(3));

    let state = state.with_patch(FormPatch {
        duration: Some("Aujourd'hui".to_string()),
        worry_level: Some("Peu inquiétant".to_string()),
        ..FormPatch::default()
    });
    assert_eq!(first_invalid_step(&state, &config, today), Some(5));

    let state = state.with_patch(FormPatch {
        consent: Some(true),
        ..FormPatch::default()
    });
    assert_eq!(first_invalid_step(&state, &config, today), None);

    let answers = state.into_answers();
    assert!(pediguide_forms::validate_submission(answers, &config, today).is_ok());
}

#[test]
fn form_state_deserializes_flat_wizard_payload() {
    let state: FormState = serde_json::from_str(
        r#"{"childFirstName": "Léa", "behaviorChanges": [], "consent": true}"#,
    )
    .unwrap();
    assert_eq!(state.answers.child_first_name, "Léa");
    assert!(state.consent);
}
