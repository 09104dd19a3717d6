pub const DEFAULT_BASE_URL: &str = "https://verification.didit.me";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Didit credentials and endpoints.
#[derive(Debug, Clone)]
pub struct DiditConfig {
    pub app_id: String,
    pub workflow_id: String,
    pub api_key: String,
    pub webhook_secret: String,
    pub base_url: String,
    /// Where the provider sends the doctor back after verification.
    pub callback_url: String,
}

impl DiditConfig {
    /// Build from raw settings. `None` unless app id, API key and webhook
    /// secret are all non-empty.
    pub fn from_parts(
        app_id: Option<String>,
        workflow_id: Option<String>,
        api_key: Option<String>,
        webhook_secret: Option<String>,
        base_url: Option<String>,
        frontend_url: Option<String>,
    ) -> Option<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let app_id = present(app_id)?;
        let api_key = present(api_key)?;
        let webhook_secret = present(webhook_secret)?;
        let base_url = present(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let frontend_url = present(frontend_url).unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());

        Some(Self {
            app_id,
            workflow_id: workflow_id.unwrap_or_default(),
            api_key,
            webhook_secret,
            base_url: base_url.trim_end_matches('/').to_string(),
            callback_url: format!("{}/profile", frontend_url.trim_end_matches('/')),
        })
    }

    pub fn session_url(&self) -> String {
        format!("{}/v2/session/", self.base_url)
    }
}
