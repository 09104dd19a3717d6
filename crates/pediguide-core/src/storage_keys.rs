//! Object key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the PediGuide bucket.

use uuid::Uuid;

/// Identifier of the single active form configuration.
pub const FORM_CONFIG_ID: &str = "default";

pub fn form_config() -> String {
    format!("form-config/{FORM_CONFIG_ID}.json")
}

pub const SUBMISSIONS_PREFIX: &str = "submissions/";

pub fn submission(id: Uuid) -> String {
    format!("{SUBMISSIONS_PREFIX}{id}.json")
}

pub const DOCTORS_PREFIX: &str = "doctors/";

pub fn doctor(id: Uuid) -> String {
    format!("{DOCTORS_PREFIX}{id}.json")
}

/// Parse the id back out of a `submissions/{id}.json` or `doctors/{id}.json` key.
pub fn id_from_key(key: &str, prefix: &str) -> Option<Uuid> {
    key.strip_prefix(prefix)?
        .strip_suffix(".json")?
        .parse()
        .ok()
}
