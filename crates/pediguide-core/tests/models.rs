use pediguide_core::models::answers::{AnswerValue, Answers};
use pediguide_core::models::field::{AnswerShape, FieldKey, FieldType};
use pediguide_core::models::form_config::{default_form_config, CURRENT_VERSION};
use pediguide_core::models::submission::{Submission, SubmissionStatus};
use pediguide_core::storage_keys;

#[test]
fn default_config_lists_every_key_once_in_enumeration_order() {
    let config = default_form_config();
    assert_eq!(config.version, CURRENT_VERSION);

    let keys: Vec<FieldKey> = config.fields.iter().map(|f| f.key).collect();
    assert_eq!(keys, FieldKey::ALL.to_vec());
}

#[test]
fn default_config_respects_allowed_types_and_options() {
    for field in default_form_config().fields {
        assert!(
            field.key.allows(field.field_type),
            "{} uses disallowed type {}",
            field.key,
            field.field_type
        );
        if field.field_type.is_choice() {
            assert!(!field.options().is_empty(), "{} has no options", field.key);
            assert!(field.options().iter().all(|o| o.value == o.label));
        } else {
            assert!(field.options.is_none());
        }
    }
}

#[test]
fn default_config_option_counts() {
    let config = default_form_config();
    let count = |key| config.field(key).map(|f| f.options().len()).unwrap_or(0);
    assert_eq!(count(FieldKey::BehaviorChanges), 3);
    assert_eq!(count(FieldKey::ClinicalSigns), 3);
    assert_eq!(count(FieldKey::Duration), 4);
    assert_eq!(count(FieldKey::WorryLevel), 3);
    assert_eq!(count(FieldKey::ActionsTaken), 3);
    assert!(!config.is_required(FieldKey::AdditionalNotes));
    assert!(config.is_required(FieldKey::ChildLastName));
}

#[test]
fn field_key_parses_its_wire_name() {
    for key in FieldKey::ALL {
        assert_eq!(key.as_str().parse::<FieldKey>().unwrap(), key);
        assert_eq!(
            serde_json::to_value(key).unwrap(),
            serde_json::Value::String(key.as_str().to_string())
        );
    }
    assert!("consent".parse::<FieldKey>().is_err());
}

#[test]
fn list_keys_only_allow_checkbox() {
    for key in FieldKey::ALL {
        let list_types = key.allowed_types().iter().all(|t| *t == FieldType::Checkbox);
        assert_eq!(key.shape() == AnswerShape::List, list_types, "{key}");
    }
}

#[test]
fn field_schema_wire_format() {
    let config = default_form_config();
    let json = serde_json::to_value(&config).unwrap();

    let first = &json["fields"][0];
    assert_eq!(first["key"], "childFirstName");
    assert_eq!(first["type"], "text");
    assert_eq!(first["isActive"], true);
    assert!(first["helpText"].is_null());
    assert!(first.get("options").is_none());

    let duration = &json["fields"][6];
    assert_eq!(duration["key"], "duration");
    assert_eq!(duration["options"][0]["value"], "Aujourd'hui");
}

#[test]
fn answers_default_missing_keys_and_expose_shapes() {
    let answers: Answers = serde_json::from_str(
        r#"{"childFirstName": "Léa", "clinicalSigns": ["Toux"]}"#,
    )
    .unwrap();

    assert_eq!(answers.get(FieldKey::ChildFirstName), AnswerValue::Text("Léa"));
    assert!(answers.get(FieldKey::ChildLastName).is_empty());
    assert_eq!(
        answers.get(FieldKey::ClinicalSigns),
        AnswerValue::List(&["Toux".to_string()])
    );
    assert!(answers.get(FieldKey::ActionsTaken).is_empty());
}

#[test]
fn answers_reject_wrong_shape() {
    let result = serde_json::from_str::<Answers>(r#"{"duration": ["a", "b"]}"#);
    assert!(result.is_err());
}

#[test]
fn trimmed_drops_blank_list_entries() {
    let answers = Answers {
        child_first_name: "  Noah ".to_string(),
        behavior_changes: vec![" ".to_string(), "Il est plus fatigué".to_string()],
        ..Answers::default()
    }
    .trimmed();

    assert_eq!(answers.child_first_name, "Noah");
    assert_eq!(answers.behavior_changes, vec!["Il est plus fatigué".to_string()]);
}

#[test]
fn submission_flattens_answers_and_defaults_status() {
    let submission = Submission::new(Answers {
        duration: "Aujourd'hui".to_string(),
        ..Answers::default()
    });
    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(json["duration"], "Aujourd'hui");
    assert_eq!(json["status"], "new");

    let back: Submission = serde_json::from_value(json).unwrap();
    assert_eq!(back, submission);
    assert_eq!(back.status, SubmissionStatus::New);
    assert_eq!("in_review".parse::<SubmissionStatus>().unwrap(), SubmissionStatus::InReview);
}

#[test]
fn storage_keys_round_trip_ids() {
    let id = uuid::Uuid::new_v4();
    let key = storage_keys::submission(id);
    assert_eq!(
        storage_keys::id_from_key(&key, storage_keys::SUBMISSIONS_PREFIX),
        Some(id)
    );
    assert_eq!(storage_keys::form_config(), "form-config/default.json");
    assert_eq!(storage_keys::id_from_key("doctors/nope.json", storage_keys::DOCTORS_PREFIX), None);
}
