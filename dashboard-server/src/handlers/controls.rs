//! Control definitions handler

use axum::{extract::State, Json};
use maintenance_core::logic::controls::ControlPanel;

use crate::AppState;

/// Slider bounds, defaults and selector options
pub async fn get(State(state): State<AppState>) -> Json<ControlPanel> {
    Json(state.dashboard.controls())
}
