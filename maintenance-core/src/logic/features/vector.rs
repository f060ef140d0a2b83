//! Feature Vector - Model input built from a Reading
//!
//! Carries the layout version and hash so a predictor can refuse input
//! built against a different schema.

use serde::{Deserialize, Serialize};

use super::layout::{
    layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_PARAMETERS,
    FEATURE_VERSION,
};
use crate::logic::telemetry::Reading;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub version: u8,
    pub layout_hash: u32,
    /// Values in FEATURE_LAYOUT order
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Single-precision copy for tensor backends
    pub fn to_f32(&self) -> [f32; FEATURE_COUNT] {
        self.values.map(|v| v as f32)
    }

    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }
}

impl From<&Reading> for FeatureVector {
    fn from(reading: &Reading) -> Self {
        Self::from_values(FEATURE_PARAMETERS.map(|p| reading.get(p)))
    }
}
