use hmac::{Hmac, Mac};
use serde::Deserialize;
use serde_json::{json, Value};
use sha2::Sha256;
use uuid::Uuid;

use pediguide_core::models::doctor::KycStatus;

use crate::error::KycError;
use crate::status::map_status;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex HMAC-SHA256 of the raw request body.
pub const SIGNATURE_HEADER: &str = "x-didit-signature";

/// Constant-time check of a hex HMAC-SHA256 signature over `body`.
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Hex signature for `body`, as the provider computes it.
pub fn sign(secret: &str, body: &[u8]) -> Result<String, KycError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| KycError::InvalidKey)?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Whatever we attached when creating the session, echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VendorData {
    Id(String),
    Object { doctor_id: Value },
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub vendor_data: Option<VendorData>,
    #[serde(default)]
    pub verification_data: Option<Value>,
}

impl WebhookPayload {
    pub fn parse(body: &[u8]) -> Result<Self, KycError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The doctor this event is about, if the vendor data names one.
    pub fn doctor_id(&self) -> Option<Uuid> {
        let raw = match self.vendor_data.as_ref()? {
            VendorData::Id(id) => id.as_str(),
            VendorData::Object { doctor_id } => doctor_id.as_str()?,
        };
        raw.trim().parse().ok()
    }

    pub fn kyc_status(&self) -> KycStatus {
        map_status(self.status.as_deref())
    }

    /// Snapshot stored on the doctor record.
    pub fn kyc_data(&self, received_at: jiff::Timestamp) -> Value {
        json!({
            "status": self.status,
            "session_id": self.session_id,
            "verification_data": self.verification_data,
            "updated_at": received_at.to_string(),
        })
    }
}
