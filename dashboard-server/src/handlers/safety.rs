//! Safety distribution handler

use axum::{extract::State, Json};
use maintenance_core::logic::trends::SafetyDistribution;

use crate::AppState;

/// Safe vs Unsafe across the whole log
pub async fn distribution(State(state): State<AppState>) -> Json<SafetyDistribution> {
    Json(state.dashboard.safety_distribution())
}
