//! Model Module - Maintenance-hours predictor
//!
//! The model is trained elsewhere and treated as a black box:
//! feature vector in, "hours until maintenance" out.
//! Backends implement [`Predictor`]; [`load_predictor`] picks one by file
//! extension and verifies the artifact digest when a pin is configured.

pub mod checksum;
pub mod inference;
pub mod regression;
pub mod stats;

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::features::layout::layout_hash;
use crate::logic::features::{FeatureVector, LayoutMismatchError, FEATURE_VERSION};

pub use inference::OnnxPredictor;
pub use regression::{JsonPredictor, RegressionModel, RegressionTree, TreeNode};
pub use stats::InferenceStats;

// ============================================================================
// PREDICTOR TRAIT
// ============================================================================

/// Opaque regression function over the model feature layout
pub trait Predictor: Send + Sync {
    /// Predicted hours until the next maintenance is due
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;

    fn metadata(&self) -> &ModelMetadata;
}

// ============================================================================
// METADATA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Onnx,
    RandomForest,
    Linear,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub model_type: ModelKind,
    /// SHA-256 of the artifact, hex
    pub sha256: String,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub loaded_at: DateTime<Utc>,
}

impl ModelMetadata {
    pub fn new(model_path: String, model_type: ModelKind, sha256: String) -> Self {
        Self {
            model_path,
            model_type,
            sha256,
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            loaded_at: Utc::now(),
        }
    }
}

/// Engine Status for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model: ModelMetadata,
    pub inference_device: String,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

impl EngineStatus {
    pub fn new(predictor: &dyn Predictor, stats: &InferenceStats) -> Self {
        let model = predictor.metadata().clone();
        let inference_device = match model.model_type {
            ModelKind::Onnx => "ONNX Runtime (CPU)",
            ModelKind::RandomForest | ModelKind::Linear => "Native (CPU)",
        };

        Self {
            model_loaded: true,
            model,
            inference_device: inference_device.to_string(),
            avg_latency_ms: stats.avg_latency_ms(),
            inference_count: stats.count(),
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error("inference backend error: {0}")]
    Backend(String),

    #[error("model produced no output")]
    EmptyOutput,

    #[error("model produced a non-finite estimate ({0})")]
    NonFinite(f64),
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported model format: {0} (expected .onnx or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error("ONNX runtime: {0}")]
    Onnx(String),
}

pub(crate) fn finite(estimate: f64) -> Result<f64, InferenceError> {
    if estimate.is_finite() {
        Ok(estimate)
    } else {
        Err(InferenceError::NonFinite(estimate))
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Load a model artifact, verifying its SHA-256 when `expected_sha256` is set
pub fn load_predictor(
    path: impl AsRef<Path>,
    expected_sha256: Option<&str>,
) -> Result<Box<dyn Predictor>, ModelError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }

    let io_err = |source: io::Error| ModelError::Io {
        path: path.to_path_buf(),
        source,
    };

    let sha256 = checksum::file_sha256(path).map_err(io_err)?;
    match expected_sha256 {
        Some(pinned) if !checksum::matches_pin(&sha256, pinned) => {
            return Err(ModelError::ChecksumMismatch {
                expected: pinned.trim().to_lowercase(),
                actual: sha256,
            });
        }
        Some(_) => log::info!("Model checksum verified: {}", sha256),
        None => log::debug!("No model checksum pinned (sha256 {})", sha256),
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("onnx") => Ok(Box::new(OnnxPredictor::load(path, sha256)?)),
        Some("json") => {
            log::info!("Loading regression model from: {}", path.display());
            let bytes = std::fs::read(path).map_err(io_err)?;
            let model = RegressionModel::from_json(&bytes)?;
            log::info!("Regression model loaded ({:?})", model.kind());
            Ok(Box::new(JsonPredictor::new(model, path.display().to_string(), sha256)?))
        }
        _ => Err(ModelError::UnsupportedFormat(path.to_path_buf())),
    }
}
