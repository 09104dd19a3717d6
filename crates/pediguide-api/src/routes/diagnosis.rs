use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use pediguide_core::models::answers::Answers;
use pediguide_core::models::submission::Submission;
use pediguide_export::{report_filename, submission_pdf};
use pediguide_forms::{rules, validate_submission};

use crate::error::ApiError;
use crate::middleware::auth::AuthDoctor;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Created {
    pub success: bool,
    pub id: Uuid,
}

/// A parent submits the questionnaire, checked against the active
/// configuration.
pub async fn create_diagnosis(
    State(state): State<AppState>,
    Json(answers): Json<Answers>,
) -> Result<Json<Created>, ApiError> {
    let config = state.form_config.get().await?;
    let answers = validate_submission(answers, &config, rules::today())?;

    let submission = Submission::new(answers);
    state.submissions.save_submission(&submission).await?;
    tracing::info!(submission_id = %submission.id, "questionnaire submitted");

    Ok(Json(Created {
        success: true,
        id: submission.id,
    }))
}

pub async fn list_diagnoses(
    _doctor: AuthDoctor,
    State(state): State<AppState>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    Ok(Json(state.submissions.list_submissions().await?))
}

pub async fn diagnosis_pdf(
    _doctor: AuthDoctor,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let submission = state.submissions.get_submission(id).await?;
    let config = state.form_config.get().await?;
    let bytes = submission_pdf(&submission, &config)?;

    let disposition = format!("attachment; filename=\"{}\"", report_filename(rules::today()));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
