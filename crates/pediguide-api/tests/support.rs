use pediguide_api::config::{ApiConfig, StorageBackend};
use pediguide_api::search::{fold, matches};
use pediguide_core::models::submission::{SubmissionStatus, SubmissionSummary};

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| {
        vars.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn config_needs_a_jwt_secret() {
    assert!(ApiConfig::from_lookup(lookup(&[])).is_err());
}

#[test]
fn config_defaults() {
    let config = ApiConfig::from_lookup(lookup(&[("JWT_SECRET", "s")])).unwrap();
    assert_eq!(
        config.storage,
        StorageBackend::S3 {
            bucket: "pediguide".to_string()
        }
    );
    assert_eq!(config.port, 3000);
    assert_eq!(config.jwt_ttl_secs, 86_400);
    assert!(config.didit.is_none());
}

#[test]
fn config_reads_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("JWT_SECRET", "s"),
        ("PEDIGUIDE_STORAGE", "memory"),
        ("PORT", "8080"),
        ("JWT_TTL_SECS", "60"),
        ("DIDIT_APP_ID", "app"),
        ("DIDIT_API_KEY", "key"),
        ("DIDIT_WEBHOOK_SECRET", "whsec"),
    ]))
    .unwrap();
    assert_eq!(config.storage, StorageBackend::Memory);
    assert_eq!(config.port, 8080);
    assert_eq!(config.jwt_ttl_secs, 60);
    assert_eq!(config.didit.unwrap().api_key, "key");

    assert!(ApiConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("PORT", "http")])).is_err());
    assert!(
        ApiConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("PEDIGUIDE_STORAGE", "redis")]))
            .is_err()
    );
}

#[test]
fn folding_strips_accents_and_case() {
    assert_eq!(fold("Éloïse"), "eloise");
    assert_eq!(fold("Toux SÈCHE"), "toux seche");
}

#[test]
fn search_matches_names_and_reason() {
    let summary = SubmissionSummary {
        id: uuid::Uuid::new_v4(),
        patient_first_name: "Léa".to_string(),
        patient_last_name: "Durand".to_string(),
        consultation_reason: "Fièvre".to_string(),
        submitted_at: jiff::Timestamp::now(),
        status: SubmissionStatus::New,
    };
    assert!(matches(&summary, ""));
    assert!(matches(&summary, "  lea "));
    assert!(matches(&summary, "lea durand"));
    assert!(matches(&summary, "FIEVRE"));
    assert!(!matches(&summary, "martin"));
}
