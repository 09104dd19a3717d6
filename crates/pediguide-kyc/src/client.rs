use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DiditConfig;
use crate::error::KycError;
use crate::webhook;
use crate::{BoxFuture, VerificationProvider};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    pub session_id: String,
    /// Hosted verification page to send the doctor to.
    pub url: String,
}

#[derive(Serialize)]
struct CreateSessionRequest<'a> {
    workflow_id: &'a str,
    callback: &'a str,
    vendor_data: String,
}

#[derive(Deserialize)]
struct CreateSessionResponse {
    session_id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    redirect_url: Option<String>,
}

/// Thin client over the Didit session API.
#[derive(Clone)]
pub struct DiditClient {
    http: reqwest::Client,
    config: DiditConfig,
}

impl DiditClient {
    pub fn new(config: DiditConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &DiditConfig {
        &self.config
    }

    /// `POST {base}/v2/session/` with the doctor id as vendor data.
    pub async fn create_session(&self, doctor_id: Uuid) -> Result<VerificationSession, KycError> {
        let url = self.config.session_url();
        let body = CreateSessionRequest {
            workflow_id: &self.config.workflow_id,
            callback: &self.config.callback_url,
            vendor_data: doctor_id.to_string(),
        };

        tracing::info!(%url, doctor_id = %doctor_id, "creating Didit session");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KycError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let created: CreateSessionResponse = response.json().await?;
        let url = created
            .url
            .or(created.redirect_url)
            .ok_or_else(|| KycError::InvalidResponse("session has no url".to_string()))?;

        Ok(VerificationSession {
            session_id: created.session_id,
            url,
        })
    }
}

impl VerificationProvider for DiditClient {
    fn start_session(&self, doctor_id: Uuid) -> BoxFuture<'_, Result<VerificationSession, KycError>> {
        Box::pin(self.create_session(doctor_id))
    }

    fn verify_signature(&self, body: &[u8], signature: &str) -> bool {
        webhook::verify_signature(&self.config.webhook_secret, body, signature)
    }
}
