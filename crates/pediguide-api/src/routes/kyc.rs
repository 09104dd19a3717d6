use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use pediguide_core::models::doctor::KycStatus;
use pediguide_kyc::webhook::{WebhookPayload, SIGNATURE_HEADER};
use pediguide_kyc::VerificationProvider;
use pediguide_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthDoctor;
use crate::state::AppState;

#[derive(Serialize)]
pub struct StartResponse {
    pub success: bool,
    pub redirect_url: String,
    pub session_id: String,
}

#[derive(Serialize)]
pub struct WebhookResponse {
    pub success: bool,
    pub message: &'static str,
}

fn provider(state: &AppState) -> Result<Arc<dyn VerificationProvider>, ApiError> {
    state
        .kyc
        .clone()
        .ok_or_else(|| ApiError::Unavailable("identity verification is not configured".to_string()))
}

fn doctor_not_found(e: StorageError) -> ApiError {
    match e {
        StorageError::NotFound { .. } => ApiError::NotFound("Doctor not found".to_string()),
        other => other.into(),
    }
}

/// Open a verification session for the signed-in doctor.
pub async fn start(
    auth: AuthDoctor,
    State(state): State<AppState>,
) -> Result<Json<StartResponse>, ApiError> {
    let provider = provider(&state)?;
    let mut doctor = state.doctors.get_doctor(auth.id).await.map_err(doctor_not_found)?;

    if doctor.kyc_status == KycStatus::Verified {
        return Err(ApiError::BadRequest("Doctor is already verified".to_string()));
    }

    let session = provider.start_session(doctor.id).await?;

    doctor.kyc_session_id = Some(session.session_id.clone());
    doctor.kyc_status = KycStatus::Pending;
    state.doctors.save_doctor(&doctor).await?;
    tracing::info!(doctor_id = %doctor.id, session_id = %session.session_id, "verification started");

    Ok(Json(StartResponse {
        success: true,
        redirect_url: session.url,
        session_id: session.session_id,
    }))
}

/// Provider callback. The signature covers the raw body, so the body is read
/// as bytes and only parsed once it checks out.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    let provider = provider(&state)?;

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing webhook signature".to_string()))?;

    if !provider.verify_signature(&body, signature) {
        tracing::warn!("webhook signature mismatch");
        return Err(ApiError::Forbidden("Invalid signature".to_string()));
    }

    let payload = WebhookPayload::parse(&body)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let doctor_id = payload
        .doctor_id()
        .ok_or_else(|| ApiError::BadRequest("Missing doctor_id in webhook data".to_string()))?;

    let mut doctor = state.doctors.get_doctor(doctor_id).await.map_err(doctor_not_found)?;
    doctor.kyc_status = payload.kyc_status();
    doctor.kyc_data = Some(payload.kyc_data(jiff::Timestamp::now()));
    state.doctors.save_doctor(&doctor).await?;

    tracing::info!(doctor_id = %doctor_id, kyc_status = ?doctor.kyc_status, "KYC status updated");

    Ok(Json(WebhookResponse {
        success: true,
        message: "Webhook processed successfully",
    }))
}
