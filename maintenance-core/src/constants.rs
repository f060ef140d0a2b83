//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! The server reads overrides from the environment and falls back to these.

/// Default telemetry log file (CSV)
pub const DEFAULT_TELEMETRY_PATH: &str = "mt_zaria_engine_log_cleaned2.csv";

/// Default model artifact
pub const DEFAULT_MODEL_PATH: &str = "regression_model.onnx";

/// Predicted hours below which maintenance is flagged regardless of verdict
pub const DEFAULT_ALERT_HOURS: f64 = 5.0;

/// Raw-data preview row selector (inclusive)
pub const PREVIEW_ROWS_MIN: usize = 5;
pub const PREVIEW_ROWS_MAX: usize = 50;
pub const PREVIEW_ROWS_DEFAULT: usize = 10;

/// Moving-average window selector (inclusive)
pub const WINDOW_MIN: usize = 2;
pub const WINDOW_MAX: usize = 50;
pub const WINDOW_DEFAULT: usize = 5;

/// Alert messages shown with every assessment
pub const ALERT_IMMEDIATE: &str = "Immediate maintenance action recommended!";
pub const ALERT_NOMINAL: &str = "Engine is operating within safe parameters.";

/// App name
pub const APP_NAME: &str = "Engine Maintenance Dashboard";
