use axum::extract::State;
use axum::Json;
use serde_json::Value;

use pediguide_core::models::form_config::FormConfig;
use pediguide_forms::validate_form_config;

use crate::error::ApiError;
use crate::middleware::auth::AuthDoctor;
use crate::routes::DataResponse;
use crate::state::AppState;

pub async fn get_form_config(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<FormConfig>>, ApiError> {
    let config = state.form_config.get().await?;
    Ok(Json(DataResponse::new(config)))
}

pub async fn get_doctor_form_config(
    _doctor: AuthDoctor,
    State(state): State<AppState>,
) -> Result<Json<DataResponse<FormConfig>>, ApiError> {
    let config = state.form_config.get().await?;
    Ok(Json(DataResponse::new(config)))
}

/// Replace the questionnaire. The payload is validated as a whole and either
/// stored normalized or rejected with every problem listed.
pub async fn update_form_config(
    doctor: AuthDoctor,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<DataResponse<FormConfig>>, ApiError> {
    let config = validate_form_config(&payload)?;
    let saved = state.form_config.put(config).await?;
    tracing::info!(doctor_id = %doctor.id, "form configuration updated");
    Ok(Json(DataResponse::new(saved)))
}
