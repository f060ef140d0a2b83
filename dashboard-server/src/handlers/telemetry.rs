//! Raw telemetry preview handler

use axum::{extract::State, Json};
use serde::Serialize;
use validator::Validate;

use maintenance_core::logic::trends::PreviewRow;

use crate::extract::AppQuery;
use crate::{AppState, AppResult};
use crate::models::PreviewQuery;

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub total_rows: usize,
    pub rows: Vec<PreviewRow>,
}

/// First N rows of the historical log
pub async fn preview(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PreviewQuery>,
) -> AppResult<Json<PreviewResponse>> {
    query.validate()?;

    Ok(Json(PreviewResponse {
        total_rows: state.dashboard.log().len(),
        rows: state.dashboard.preview(query.rows()),
    }))
}
