//! Accent- and case-insensitive matching for the doctor dashboard.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use pediguide_core::models::submission::SubmissionSummary;

/// Lowercase with diacritics stripped: `"Éloïse"` → `"eloise"`.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a dashboard row matches the search box. Blank queries match
/// everything.
pub fn matches(summary: &SubmissionSummary, query: &str) -> bool {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return true;
    }

    let full_name = format!("{} {}", summary.patient_first_name, summary.patient_last_name);
    [
        summary.patient_first_name.as_str(),
        summary.patient_last_name.as_str(),
        full_name.as_str(),
        summary.consultation_reason.as_str(),
    ]
    .into_iter()
    .any(|haystack| fold(haystack).contains(&needle))
}
