//! Feature Layout - Model Input Schema
//!
//! **This file controls the model input schema**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! Model artifacts record the feature names they were trained on; those are
//! checked against this layout at load time.

use crc32fast::Hasher;
use thiserror::Error;

use crate::logic::telemetry::Parameter;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT
// ============================================================================

/// Column names in the exact order the model was trained on
pub const FEATURE_LAYOUT: &[&str] = &[
    "Hours",           // 0: elapsed operating hours
    "Vibration Level", // 1
    "Temp",            // 2: °C
    "Oil pressure",    // 3: bar
    "Fuel",            // 4: L/h
    "Load",            // 5: %
    "RPM",             // 6
];

/// Total number of features
/// Must match FEATURE_LAYOUT.len()
pub const FEATURE_COUNT: usize = 7;

/// Parameter for each layout slot
pub const FEATURE_PARAMETERS: [Parameter; FEATURE_COUNT] = Parameter::ALL;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of version + names, to detect layout mismatches at runtime
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutMismatchError {
    #[error("feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), got v{actual_version} (hash: {actual_hash:08x})")]
    Version {
        expected_version: u8,
        expected_hash: u32,
        actual_version: u8,
        actual_hash: u32,
    },

    #[error("model expects features {actual:?}, dashboard provides {expected:?}")]
    Names {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// Validate a version/hash pair against the current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError::Version {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

/// Validate the feature names recorded in a model artifact
pub fn validate_feature_names(names: &[String]) -> Result<(), LayoutMismatchError> {
    let matches = names.len() == FEATURE_COUNT
        && names.iter().zip(FEATURE_LAYOUT).all(|(a, b)| a == b);

    if !matches {
        return Err(LayoutMismatchError::Names {
            expected: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            actual: names.to_vec(),
        });
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
