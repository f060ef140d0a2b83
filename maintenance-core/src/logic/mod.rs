//! Logic Module - Business Logic & Engines
//!
//! - `telemetry/` - Readings and the historical log (CSV)
//! - `features/` - Model input layout (versioned)
//! - `model/` - Predictor backends (ONNX, JSON regression)
//! - `safety/` - Fixed-range safety evaluator
//! - `trends/` - Chart data over the log
//! - `dashboard` - Engine tying the above together

pub mod telemetry;
pub mod features;
pub mod model;
pub mod safety;
pub mod trends;
pub mod alert;
pub mod controls;
pub mod dashboard;
