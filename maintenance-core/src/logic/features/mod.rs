//! Features Module - Model input schema
//!
//! The feature layout is versioned and hashed; model artifacts are checked
//! against it before they are used.

pub mod layout;
pub mod vector;

pub use layout::{
    validate_feature_names, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT,
    FEATURE_VERSION,
};
pub use vector::FeatureVector;
