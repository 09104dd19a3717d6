//! pediguide-export
//!
//! Consultation reports: a submission laid out against the active form
//! configuration, rendered to text with Tera, then typeset as PDF.

pub mod error;
pub mod pdf;
pub mod render;

use pediguide_core::models::form_config::FormConfig;
use pediguide_core::models::submission::Submission;

use crate::error::ExportError;

/// Report PDF bytes for one submission.
pub fn submission_pdf(submission: &Submission, config: &FormConfig) -> Result<Vec<u8>, ExportError> {
    let report = render::Report::build(submission, config);
    let text = render::render_report(&report)?;
    pdf::generate_pdf(&text)
}

/// `pediguide-report-YYYY-MM-DD.pdf`
pub fn report_filename(date: jiff::civil::Date) -> String {
    format!("pediguide-report-{date}.pdf")
}
