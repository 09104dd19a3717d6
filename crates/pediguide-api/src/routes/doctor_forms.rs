use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pediguide_core::models::submission::{Submission, SubmissionStatus, SubmissionSummary};

use crate::error::ApiError;
use crate::middleware::auth::AuthDoctor;
use crate::search;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FormsQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Serialize)]
pub struct FormsList {
    pub items: Vec<SubmissionSummary>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Dashboard rows, newest first, optionally filtered by name or reason.
pub async fn list_forms(
    _doctor: AuthDoctor,
    State(state): State<AppState>,
    Query(query): Query<FormsQuery>,
) -> Result<Json<FormsList>, ApiError> {
    let needle = query.search.unwrap_or_default();
    let items = state
        .submissions
        .list_submissions()
        .await?
        .iter()
        .map(SubmissionSummary::from)
        .filter(|summary| search::matches(summary, &needle))
        .collect();

    Ok(Json(FormsList { items }))
}

pub async fn get_form(
    _doctor: AuthDoctor,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Submission>, ApiError> {
    Ok(Json(state.submissions.get_submission(id).await?))
}

pub async fn update_status(
    doctor: AuthDoctor,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Submission>, ApiError> {
    let status: SubmissionStatus = update.status.parse()?;
    let submission = state.submissions.set_status(id, status).await?;
    tracing::info!(doctor_id = %doctor.id, submission_id = %id, "submission reviewed");
    Ok(Json(submission))
}
