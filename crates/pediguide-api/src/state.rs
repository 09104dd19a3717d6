use std::sync::Arc;

use pediguide_auth::DEFAULT_COST;
use pediguide_kyc::{DiditClient, VerificationProvider};
use pediguide_storage::bucket::Bucket;
use pediguide_storage::{
    ConfigStore, DoctorStore, MemoryStore, S3ConfigStore, S3DoctorStore, S3SubmissionStore,
    SubmissionStore,
};

use crate::config::{ApiConfig, StorageBackend};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub form_config: Arc<dyn ConfigStore>,
    pub submissions: Arc<dyn SubmissionStore>,
    pub doctors: Arc<dyn DoctorStore>,
    /// `None` when Didit is not configured.
    pub kyc: Option<Arc<dyn VerificationProvider>>,
    pub jwt_secret: Arc<str>,
    pub jwt_ttl_secs: i64,
    pub password_cost: u32,
}

impl AppState {
    pub async fn from_config(config: &ApiConfig) -> Self {
        let mut state = match &config.storage {
            StorageBackend::Memory => Self::in_memory(&config.jwt_secret),
            StorageBackend::S3 { bucket } => {
                let client = pediguide_storage::client::build_client().await;
                let bucket = Bucket::new(client, bucket.clone());
                Self {
                    form_config: Arc::new(S3ConfigStore::new(bucket.clone())),
                    submissions: Arc::new(S3SubmissionStore::new(bucket.clone())),
                    doctors: Arc::new(S3DoctorStore::new(bucket)),
                    kyc: None,
                    jwt_secret: Arc::from(config.jwt_secret.as_str()),
                    jwt_ttl_secs: config.jwt_ttl_secs,
                    password_cost: DEFAULT_COST,
                }
            }
        };

        state.jwt_ttl_secs = config.jwt_ttl_secs;
        if let Some(didit) = &config.didit {
            state.kyc = Some(Arc::new(DiditClient::new(didit.clone())));
        }
        state
    }

    /// Everything held in one [`MemoryStore`], no KYC provider.
    pub fn in_memory(jwt_secret: &str) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            form_config: store.clone(),
            submissions: store.clone(),
            doctors: store,
            kyc: None,
            jwt_secret: Arc::from(jwt_secret),
            jwt_ttl_secs: pediguide_auth::DEFAULT_TOKEN_TTL_SECS,
            password_cost: DEFAULT_COST,
        }
    }

    pub fn with_kyc(mut self, provider: Arc<dyn VerificationProvider>) -> Self {
        self.kyc = Some(provider);
        self
    }

    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }
}
