use axum::extract::State;
use axum::Json;
use serde::Serialize;

use pediguide_core::models::doctor::DoctorProfile;
use pediguide_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthDoctor;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub doctor: DoctorProfile,
}

pub async fn me(
    doctor: AuthDoctor,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let record = state.doctors.get_doctor(doctor.id).await.map_err(|e| match e {
        StorageError::NotFound { .. } => ApiError::NotFound("Doctor not found".to_string()),
        other => other.into(),
    })?;

    Ok(Json(ProfileResponse {
        success: true,
        doctor: DoctorProfile::from(&record),
    }))
}
