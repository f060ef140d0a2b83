//! Safety Evaluator
//!
//! Binary classification of a reading against a [`SafetyRange`].
//! Short-circuits on the first out-of-range parameter.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ranges::{Bounds, SafetyRange};
use crate::logic::telemetry::{Parameter, Reading};

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    Unsafe,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Unsafe => "Unsafe",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parameter that made a reading Unsafe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub parameter: Parameter,
    pub value: f64,
    pub bounds: Bounds,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} outside [{}, {}]",
            self.parameter, self.value, self.bounds.min, self.bounds.max
        )
    }
}

/// Verdict plus the first violation found
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub verdict: Verdict,
    pub violation: Option<Violation>,
}

// ============================================================================
// EVALUATOR
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyEvaluator {
    ranges: SafetyRange,
}

impl SafetyEvaluator {
    pub fn ranges(&self) -> &SafetyRange {
        &self.ranges
    }

    /// Classify a validated reading
    pub fn evaluate(&self, reading: &Reading) -> Verdict {
        self.inspect(reading).verdict
    }

    /// Classify and report the first out-of-range parameter
    pub fn inspect(&self, reading: &Reading) -> Inspection {
        let violation = self.ranges.table().into_iter().find_map(|(parameter, bounds)| {
            let value = reading.get(parameter);
            (!bounds.contains(value)).then_some(Violation {
                parameter,
                value,
                bounds,
            })
        });

        Inspection {
            verdict: if violation.is_some() { Verdict::Unsafe } else { Verdict::Safe },
            violation,
        }
    }
}
