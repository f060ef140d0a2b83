//! JSON Regression Models
//!
//! Portable model artifact for environments without ONNX Runtime.
//! Either a forest of regression trees (prediction = mean of the leaves
//! reached) or a linear model. Trees follow the usual split convention:
//! `x[feature] <= threshold` goes left.
//!
//! ```json
//! {
//!   "model_type": "random_forest",
//!   "feature_names": ["Hours", "Vibration Level", "Temp", "Oil pressure", "Fuel", "Load", "RPM"],
//!   "trees": [
//!     { "nodes": [
//!         { "feature": 0, "threshold": 800.0, "left": 1, "right": 2 },
//!         { "value": 120.0 },
//!         { "value": 4.5 }
//!     ] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{InferenceError, ModelError, ModelKind, ModelMetadata, Predictor};
use crate::logic::features::{validate_feature_names, FeatureVector, FEATURE_COUNT};

// ============================================================================
// ARTIFACT FORMAT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    /// Root at index 0; children always point forward
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    fn validate(&self, tree_index: usize) -> Result<(), ModelError> {
        let invalid = |msg: String| ModelError::Invalid(format!("tree {}: {}", tree_index, msg));

        if self.nodes.is_empty() {
            return Err(invalid("no nodes".to_string()));
        }

        let len = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split { feature, threshold, left, right } => {
                    if feature >= FEATURE_COUNT {
                        return Err(invalid(format!("node {} splits on unknown feature {}", i, feature)));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(format!("node {} has a non-finite threshold", i)));
                    }
                    for child in [left, right] {
                        if child <= i || child >= len {
                            return Err(invalid(format!("node {} has invalid child index {}", i, child)));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(invalid(format!("leaf {} has a non-finite value", i)));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk from the root to a leaf. Terminates because children point forward.
    pub fn evaluate(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split { feature, threshold, left, right } => {
                    index = if features[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum RegressionModel {
    RandomForest {
        feature_names: Vec<String>,
        trees: Vec<RegressionTree>,
    },
    Linear {
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

impl RegressionModel {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        let model: RegressionModel = serde_json::from_slice(bytes)?;
        model.validate()?;
        Ok(model)
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            RegressionModel::RandomForest { .. } => ModelKind::RandomForest,
            RegressionModel::Linear { .. } => ModelKind::Linear,
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        match self {
            RegressionModel::RandomForest { feature_names, trees } => {
                validate_feature_names(feature_names)?;
                if trees.is_empty() {
                    return Err(ModelError::Invalid("random forest has no trees".to_string()));
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate(i)?;
                }
            }
            RegressionModel::Linear { feature_names, coefficients, intercept } => {
                validate_feature_names(feature_names)?;
                if coefficients.len() != FEATURE_COUNT {
                    return Err(ModelError::Invalid(format!(
                        "linear model has {} coefficients, expected {}",
                        coefficients.len(),
                        FEATURE_COUNT
                    )));
                }
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(ModelError::Invalid("linear model has non-finite weights".to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn predict_values(&self, values: &[f64; FEATURE_COUNT]) -> f64 {
        match self {
            RegressionModel::RandomForest { trees, .. } => {
                let sum: f64 = trees.iter().map(|t| t.evaluate(values)).sum();
                sum / trees.len() as f64
            }
            RegressionModel::Linear { coefficients, intercept, .. } => {
                intercept + coefficients.iter().zip(values).map(|(c, x)| c * x).sum::<f64>()
            }
        }
    }
}

// ============================================================================
// PREDICTOR
// ============================================================================

/// Predictor backed by a JSON regression artifact
#[derive(Debug, Clone)]
pub struct JsonPredictor {
    model: RegressionModel,
    metadata: ModelMetadata,
}

impl JsonPredictor {
    /// Validates the model; an unchecked tree could loop or index out of bounds
    pub fn new(model: RegressionModel, path: String, sha256: String) -> Result<Self, ModelError> {
        model.validate()?;
        let metadata = ModelMetadata::new(path, model.kind(), sha256);
        Ok(Self { model, metadata })
    }
}

impl Predictor for JsonPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        features.validate()?;
        super::finite(self.model.predict_values(&features.values))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FEATURE_LAYOUT;

    fn names() -> Vec<String> {
        FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect()
    }

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> RegressionTree {
        RegressionTree {
            nodes: vec![
                TreeNode::Split { feature, threshold, left: 1, right: 2 },
                TreeNode::Leaf { value: low },
                TreeNode::Leaf { value: high },
            ],
        }
    }

    #[test]
    fn test_forest_averages_trees() {
        let model = RegressionModel::RandomForest {
            feature_names: names(),
            trees: vec![stump(0, 800.0, 100.0, 4.0), stump(6, 1000.0, 50.0, 2.0)],
        };
        model.validate().unwrap();

        // Hours 500 (left: 100), RPM 900 (left: 50)
        let values = [500.0, 0.5, 85.0, 3.0, 20.0, 60.0, 900.0];
        assert_eq!(model.predict_values(&values), 75.0);

        // Hours 900 (right: 4), RPM 1500 (right: 2)
        let values = [900.0, 0.5, 85.0, 3.0, 20.0, 60.0, 1500.0];
        assert_eq!(model.predict_values(&values), 3.0);
    }

    #[test]
    fn test_split_threshold_goes_left() {
        let tree = stump(2, 85.0, 1.0, 2.0);
        let mut values = [0.0; FEATURE_COUNT];
        values[2] = 85.0;
        assert_eq!(tree.evaluate(&values), 1.0);
    }

    #[test]
    fn test_linear_model() {
        let model = RegressionModel::Linear {
            feature_names: names(),
            coefficients: vec![-0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            intercept: 100.0,
        };
        let values = [500.0, 0.5, 85.0, 3.0, 20.0, 60.0, 900.0];
        assert!((model.predict_values(&values) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_documented_artifact() {
        let json = r#"{
            "model_type": "random_forest",
            "feature_names": ["Hours", "Vibration Level", "Temp", "Oil pressure", "Fuel", "Load", "RPM"],
            "trees": [
                { "nodes": [
                    { "feature": 0, "threshold": 800.0, "left": 1, "right": 2 },
                    { "value": 120.0 },
                    { "value": 4.5 }
                ] }
            ]
        }"#;
        let model = RegressionModel::from_json(json.as_bytes()).unwrap();
        assert_eq!(model.kind(), ModelKind::RandomForest);
    }

    #[test]
    fn test_backward_child_rejected() {
        let model = RegressionModel::RandomForest {
            feature_names: names(),
            trees: vec![RegressionTree {
                nodes: vec![
                    TreeNode::Split { feature: 0, threshold: 1.0, left: 0, right: 1 },
                    TreeNode::Leaf { value: 1.0 },
                ],
            }],
        };
        assert!(matches!(model.validate(), Err(ModelError::Invalid(_))));
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let model = RegressionModel::RandomForest {
            feature_names: names(),
            trees: vec![stump(FEATURE_COUNT, 1.0, 1.0, 2.0)],
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_feature_name_mismatch_rejected() {
        let mut swapped = names();
        swapped.swap(1, 2);
        let model = RegressionModel::Linear {
            feature_names: swapped,
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 1.0,
        };
        assert!(matches!(model.validate(), Err(ModelError::Layout(_))));
    }

    #[test]
    fn test_json_predictor_validates_vector() {
        let model = RegressionModel::Linear {
            feature_names: names(),
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 42.0,
        };
        let predictor = JsonPredictor::new(model, "m.json".to_string(), String::new()).unwrap();

        let vector = FeatureVector::from_values([1.0; FEATURE_COUNT]);
        assert_eq!(predictor.predict(&vector).unwrap(), 42.0);

        let mut stale = vector.clone();
        stale.layout_hash ^= 1;
        assert!(matches!(predictor.predict(&stale), Err(InferenceError::Layout(_))));
    }

    #[test]
    fn test_json_predictor_rejects_self_loop() {
        let model = RegressionModel::RandomForest {
            feature_names: names(),
            trees: vec![RegressionTree {
                nodes: vec![TreeNode::Split { feature: 0, threshold: 1.0, left: 0, right: 0 }],
            }],
        };
        let err = JsonPredictor::new(model, "m.json".to_string(), String::new()).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn test_json_predictor_rejects_wrong_coefficient_count() {
        for coefficients in [vec![], vec![1.0; FEATURE_COUNT + 1]] {
            let model = RegressionModel::Linear {
                feature_names: names(),
                coefficients,
                intercept: 10.0,
            };
            let err = JsonPredictor::new(model, "m.json".to_string(), String::new()).unwrap_err();
            assert!(matches!(err, ModelError::Invalid(_)));
        }
    }
}
