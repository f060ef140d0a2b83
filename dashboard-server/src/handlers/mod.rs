//! HTTP handlers

pub mod health;
pub mod controls;
pub mod assessments;
pub mod telemetry;
pub mod trends;
pub mod safety;
pub mod model;

use crate::AppError;

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
