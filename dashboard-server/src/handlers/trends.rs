//! Trend chart handlers

use axum::{extract::State, Json};
use validator::Validate;

use maintenance_core::logic::trends::{MovingAverageTrend, ParameterTrend, ScatterPoint};

use crate::extract::AppQuery;
use crate::{AppState, AppResult};
use crate::models::{MovingAverageQuery, TrendQuery};

/// Selected parameter over hours, log order
pub async fn parameter(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TrendQuery>,
) -> AppResult<Json<ParameterTrend>> {
    let trend = state.dashboard.parameter_trend(query.parameter())?;
    Ok(Json(trend))
}

/// Selected parameter and its trailing moving average, sorted by hours
pub async fn moving_average(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MovingAverageQuery>,
) -> AppResult<Json<MovingAverageTrend>> {
    query.validate()?;

    let trend = state
        .dashboard
        .moving_average_trend(query.parameter(), query.window())?;
    Ok(Json(trend))
}

/// Engine load vs oil pressure, coloured by temperature
pub async fn load_oil_pressure(State(state): State<AppState>) -> Json<Vec<ScatterPoint>> {
    Json(state.dashboard.load_vs_oil_pressure())
}
