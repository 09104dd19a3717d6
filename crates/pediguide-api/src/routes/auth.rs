use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pediguide_auth::{hash_password, issue_token, verify_password};
use pediguide_core::models::doctor::Doctor;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub rpps: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub cps_card_url: Option<String>,
}

#[derive(Serialize)]
pub struct RegisteredDoctor {
    pub id: Uuid,
    pub email: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub doctor: RegisteredDoctor,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let rpps = req.rpps.trim().to_string();
    let email = normalize_email(&req.email);
    if rpps.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "rpps, email and password are required".to_string(),
        ));
    }

    let cost = state.password_cost;
    let password = req.password;
    let password_hash =
        tokio::task::spawn_blocking(move || hash_password(&password, cost)).await??;

    let cps_card_url = req.cps_card_url.filter(|url| !url.trim().is_empty());
    let doctor = state
        .doctors
        .register_doctor(Doctor::new(rpps, email, password_hash, cps_card_url))
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        doctor: RegisteredDoctor {
            id: doctor.id,
            email: doctor.email,
        },
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

    let email = normalize_email(&req.email);
    let doctor = state
        .doctors
        .find_doctor_by_email(&email)
        .await?
        .ok_or_else(invalid)?;

    let password = req.password;
    let hash = doctor.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await??;
    if !matches {
        tracing::info!(doctor_id = %doctor.id, "login rejected");
        return Err(invalid());
    }

    let token = issue_token(doctor.id, &state.jwt_secret, state.jwt_ttl_secs)?;
    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}
