//! Safety Module - Fixed-range engine safety checks
//!
//! Pure range lookup: no weights, no learning, no state.
//! Input: Reading. Output: Verdict (+ the first violation, if any).

pub mod ranges;
pub mod evaluator;

pub use ranges::{Bounds, SafetyRange};
pub use evaluator::{Inspection, SafetyEvaluator, Verdict, Violation};
