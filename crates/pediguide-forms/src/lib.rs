//! pediguide-forms
//!
//! The form-configuration engine. Pure logic with no storage or AWS dependency.
//! Validates doctor-supplied configurations, checks parent answers against
//! the active configuration, and models the multi-step intake wizard.

pub mod config;
pub mod error;
pub mod rules;
pub mod state;
pub mod submission;
pub mod wizard;

pub use config::validate_form_config;
pub use submission::validate_submission;
