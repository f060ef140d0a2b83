//! Configuration module

use std::env;
use std::path::PathBuf;

use maintenance_core::constants::{DEFAULT_ALERT_HOURS, DEFAULT_MODEL_PATH, DEFAULT_TELEMETRY_PATH};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Telemetry log (CSV)
    pub telemetry_path: PathBuf,

    /// Model artifact (.onnx or .json)
    pub model_path: PathBuf,

    /// Optional SHA-256 pin for the model artifact
    pub model_sha256: Option<String>,

    /// Predicted hours below which maintenance is flagged
    pub alert_hours: f64,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            telemetry_path: env::var("TELEMETRY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TELEMETRY_PATH)),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),

            model_sha256: env::var("MODEL_SHA256")
                .ok()
                .filter(|s| !s.trim().is_empty()),

            alert_hours: env::var("MAINTENANCE_ALERT_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .filter(|h: &f64| h.is_finite())
                .unwrap_or(DEFAULT_ALERT_HOURS),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
