use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AccountStatus {
    #[default]
    PendingValidation,
    Active,
}

/// Identity verification state, driven by the KYC provider's webhooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum KycStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

/// A registered doctor, as persisted. Never sent to clients as-is; see
/// [`DoctorProfile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    /// French national practitioner number.
    pub rpps: String,
    pub email: String,
    pub password_hash: String,
    pub cps_card_url: Option<String>,
    #[serde(default)]
    pub account_status: AccountStatus,
    #[serde(default)]
    pub kyc_status: KycStatus,
    #[serde(default)]
    pub kyc_session_id: Option<String>,
    /// Raw details from the most recent verification webhook.
    #[serde(default)]
    pub kyc_data: Option<serde_json::Value>,
}

impl Doctor {
    pub fn new(rpps: String, email: String, password_hash: String, cps_card_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: jiff::Timestamp::now(),
            rpps,
            email,
            password_hash,
            cps_card_url,
            account_status: AccountStatus::default(),
            kyc_status: KycStatus::default(),
            kyc_session_id: None,
            kyc_data: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DoctorProfile {
    pub id: Uuid,
    pub rpps: String,
    pub email: String,
    pub cps_card_url: Option<String>,
    pub account_status: AccountStatus,
    pub kyc_status: KycStatus,
    pub kyc_session_id: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl From<&Doctor> for DoctorProfile {
    fn from(d: &Doctor) -> Self {
        Self {
            id: d.id,
            rpps: d.rpps.clone(),
            email: d.email.clone(),
            cps_card_url: d.cps_card_url.clone(),
            account_status: d.account_status,
            kyc_status: d.kyc_status,
            kyc_session_id: d.kyc_session_id.clone(),
            created_at: d.created_at,
        }
    }
}
