//! Inference Engine - ONNX Runtime Integration
//!
//! Runs a regression model exported to ONNX (e.g. a scikit-learn forest
//! converted with skl2onnx). Input tensor `[1, FEATURE_COUNT]` f32; the first
//! element of the first output is the estimate.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::{InferenceError, ModelError, ModelKind, ModelMetadata, Predictor};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

/// ONNX-backed predictor. `Session::run` needs exclusive access, hence the lock.
pub struct OnnxPredictor {
    session: Mutex<Session>,
    output_name: String,
    metadata: ModelMetadata,
}

impl OnnxPredictor {
    /// Load an ONNX model from file
    pub fn load(model_path: &Path, sha256: String) -> Result<Self, ModelError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        let session = Session::builder()
            .map_err(|e| ModelError::Onnx(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Onnx(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ModelError::Onnx(format!("Failed to load model: {}", e)))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Invalid("ONNX model defines no outputs".to_string()))?;

        log::info!("ONNX model loaded (output: {})", output_name);

        let metadata = ModelMetadata::new(
            model_path.display().to_string(),
            ModelKind::Onnx,
            sha256,
        );

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            metadata,
        })
    }
}

impl Predictor for OnnxPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        features.validate()?;

        let input = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_f32().to_vec())
            .map_err(|e| InferenceError::Backend(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input)
            .map_err(|e| InferenceError::Backend(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Backend(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or(InferenceError::EmptyOutput)?;

        let data = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Backend(format!("Extract error: {}", e)))?
            .1;

        let estimate = data.first().copied().ok_or(InferenceError::EmptyOutput)?;
        super::finite(f64::from(estimate))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}
