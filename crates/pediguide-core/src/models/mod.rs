pub mod answers;
pub mod doctor;
pub mod field;
pub mod form_config;
pub mod submission;
