//! Model status handler

use axum::{extract::State, Json};
use maintenance_core::logic::model::EngineStatus;

use crate::AppState;

pub async fn status(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.dashboard.engine_status())
}
