use thiserror::Error;

#[derive(Debug, Error)]
pub enum KycError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Didit API error ({status}): {body}")]
    Provider { status: u16, body: String },

    #[error("unexpected Didit response: {0}")]
    InvalidResponse(String),

    #[error("invalid webhook secret")]
    InvalidKey,

    #[error("invalid webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
