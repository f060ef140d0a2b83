//! Safety Range Table
//!
//! Inclusive operating bounds per checked parameter.
//! Hours is never range-checked.

use serde::{Deserialize, Serialize};

use crate::logic::telemetry::Parameter;

/// Inclusive `[min, max]` interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends inclusive; NaN is never contained
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Safety bounds, one named field per checked parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyRange {
    pub vibration: Bounds,
    pub temp: Bounds,
    pub oil_pressure: Bounds,
    pub fuel: Bounds,
    pub load: Bounds,
    pub rpm: Bounds,
}

impl SafetyRange {
    /// Standard engine operating envelope
    pub const STANDARD: SafetyRange = SafetyRange {
        vibration: Bounds::new(0.1, 1.5),
        temp: Bounds::new(75.0, 95.0),
        oil_pressure: Bounds::new(2.0, 5.0),
        fuel: Bounds::new(10.0, 30.0),
        load: Bounds::new(30.0, 90.0),
        rpm: Bounds::new(300.0, 1200.0),
    };

    /// Bounds for a parameter; `None` for Hours
    pub fn bounds(&self, parameter: Parameter) -> Option<Bounds> {
        match parameter {
            Parameter::Hours => None,
            Parameter::Vibration => Some(self.vibration),
            Parameter::Temp => Some(self.temp),
            Parameter::OilPressure => Some(self.oil_pressure),
            Parameter::Fuel => Some(self.fuel),
            Parameter::Load => Some(self.load),
            Parameter::Rpm => Some(self.rpm),
        }
    }

    /// `(parameter, bounds)` pairs in check order; the first failing entry
    /// decides the violation reported
    pub fn table(&self) -> [(Parameter, Bounds); 6] {
        [
            (Parameter::Vibration, self.vibration),
            (Parameter::Temp, self.temp),
            (Parameter::OilPressure, self.oil_pressure),
            (Parameter::Fuel, self.fuel),
            (Parameter::Load, self.load),
            (Parameter::Rpm, self.rpm),
        ]
    }
}

impl Default for SafetyRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        let b = Bounds::new(2.0, 5.0);
        assert!(b.contains(2.0));
        assert!(b.contains(5.0));
        assert!(!b.contains(1.999));
        assert!(!b.contains(5.001));
        assert!(!b.contains(f64::NAN));
    }

    #[test]
    fn test_table_covers_every_checked_parameter() {
        let range = SafetyRange::STANDARD;
        let params: Vec<Parameter> = range.table().iter().map(|(p, _)| *p).collect();
        let checked: Vec<Parameter> = Parameter::ALL.into_iter().filter(|p| *p != Parameter::Hours).collect();
        assert_eq!(params, checked);

        for (parameter, bounds) in range.table() {
            assert_eq!(range.bounds(parameter), Some(bounds));
        }
    }

    #[test]
    fn test_hours_unchecked() {
        assert_eq!(SafetyRange::STANDARD.bounds(Parameter::Hours), None);
    }
}
