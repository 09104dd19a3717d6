use std::env;
use std::fmt;

use thiserror::Error;

use pediguide_auth::jwt::DEFAULT_TOKEN_TTL_SECS;
use pediguide_kyc::DiditConfig;

const DEFAULT_BUCKET: &str = "pediguide";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    S3 { bucket: String },
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::S3 { bucket } => write!(f, "s3://{bucket}"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub storage: StorageBackend,
    pub jwt_secret: String,
    pub jwt_ttl_secs: i64,
    pub port: u16,
    /// `None` leaves identity verification disabled.
    pub didit: Option<DiditConfig>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = get("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let storage = match get("PEDIGUIDE_STORAGE").as_deref() {
            None | Some("s3") => StorageBackend::S3 {
                bucket: get("PEDIGUIDE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            },
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "PEDIGUIDE_STORAGE",
                    value: other.to_string(),
                })
            }
        };

        let jwt_ttl_secs = parse_or(&get, "JWT_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        let port = parse_or(&get, "PORT", DEFAULT_PORT)?;

        let didit = DiditConfig::from_parts(
            get("DIDIT_APP_ID"),
            get("DIDIT_WORKFLOW_ID"),
            get("DIDIT_API_KEY"),
            get("DIDIT_WEBHOOK_SECRET"),
            get("DIDIT_BASE_URL"),
            get("FRONTEND_URL"),
        );
        if didit.is_none() {
            tracing::warn!("Didit credentials missing, identity verification disabled");
        }

        Ok(Self {
            storage,
            jwt_secret,
            jwt_ttl_secs,
            port,
            didit,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
