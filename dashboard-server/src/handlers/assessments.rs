//! Assessment handler

use axum::{extract::State, Json};
use validator::Validate;

use maintenance_core::Assessment;

use crate::extract::AppJson;
use crate::{AppState, AppResult};
use crate::models::AssessmentRequest;

/// Score and classify the current reading
pub async fn create(
    State(state): State<AppState>,
    AppJson(req): AppJson<AssessmentRequest>,
) -> AppResult<Json<Assessment>> {
    req.validate()?;

    let assessment = state.dashboard.assess(&req.into())?;

    if assessment.alert.is_immediate() {
        tracing::warn!(
            status = %assessment.status,
            predicted_hours = assessment.predicted_hours,
            "Maintenance required"
        );
    } else {
        tracing::info!(
            status = %assessment.status,
            predicted_hours = assessment.predicted_hours,
            "Reading assessed"
        );
    }

    Ok(Json(assessment))
}
