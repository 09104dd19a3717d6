use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown question key: {0}")]
    UnknownFieldKey(String),

    #[error("unknown question type: {0}")]
    UnknownFieldType(String),

    #[error("unknown submission status: {0}")]
    UnknownStatus(String),
}
