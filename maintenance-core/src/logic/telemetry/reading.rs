//! Engine Reading Types
//!
//! One snapshot of the seven monitored engine parameters.
//! Units are fixed (hours, mm/s, °C, bar, L/h, %, RPM) and never converted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// PARAMETERS
// ============================================================================

/// Monitored engine parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Parameter {
    Hours,
    Vibration,
    Temp,
    OilPressure,
    Fuel,
    Load,
    Rpm,
}

impl Parameter {
    /// All parameters, in model schema order
    pub const ALL: [Parameter; 7] = [
        Parameter::Hours,
        Parameter::Vibration,
        Parameter::Temp,
        Parameter::OilPressure,
        Parameter::Fuel,
        Parameter::Load,
        Parameter::Rpm,
    ];

    /// Parameters offered by the chart selectors, in selector order
    pub const CHARTABLE: [Parameter; 6] = [
        Parameter::Temp,
        Parameter::OilPressure,
        Parameter::Vibration,
        Parameter::Fuel,
        Parameter::Rpm,
        Parameter::Load,
    ];

    /// Column header in the telemetry log
    pub fn column_name(&self) -> &'static str {
        match self {
            Parameter::Hours => "Hours",
            Parameter::Vibration => "Vibration Level",
            Parameter::Temp => "Temp",
            Parameter::OilPressure => "Oil pressure",
            Parameter::Fuel => "Fuel",
            Parameter::Load => "Load",
            Parameter::Rpm => "RPM",
        }
    }

    /// Human-readable label with unit
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Hours => "Hours",
            Parameter::Vibration => "Vibration Level",
            Parameter::Temp => "Temperature (°C)",
            Parameter::OilPressure => "Oil Pressure (bar)",
            Parameter::Fuel => "Fuel Consumption (lph)",
            Parameter::Load => "Engine Load (%)",
            Parameter::Rpm => "RPM",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Hours => "hours",
            Parameter::Vibration => "vibration",
            Parameter::Temp => "temp",
            Parameter::OilPressure => "oil_pressure",
            Parameter::Fuel => "fuel",
            Parameter::Load => "load",
            Parameter::Rpm => "rpm",
        }
    }

    /// Hours is an x-axis, never a plotted series
    pub fn is_chartable(&self) -> bool {
        !matches!(self, Parameter::Hours)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown engine parameter: {0}")]
pub struct UnknownParameter(pub String);

impl FromStr for Parameter {
    type Err = UnknownParameter;

    /// Accepts either the API name (`oil_pressure`) or the log column (`Oil pressure`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Parameter::ALL
            .into_iter()
            .find(|p| p.as_str() == needle || p.column_name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownParameter(s.to_string()))
    }
}

impl TryFrom<String> for Parameter {
    type Error = UnknownParameter;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ============================================================================
// READING
// ============================================================================

/// Validated engine reading: every field present and finite.
/// Only built through `TryFrom<ReadingInput>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub hours: f64,
    pub vibration: f64,
    pub temp: f64,
    pub oil_pressure: f64,
    pub fuel: f64,
    pub load: f64,
    pub rpm: f64,
}

impl Reading {
    /// Get a field by parameter
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Hours => self.hours,
            Parameter::Vibration => self.vibration,
            Parameter::Temp => self.temp,
            Parameter::OilPressure => self.oil_pressure,
            Parameter::Fuel => self.fuel,
            Parameter::Load => self.load,
            Parameter::Rpm => self.rpm,
        }
    }

    /// Values in model schema order
    pub fn values(&self) -> [f64; 7] {
        Parameter::ALL.map(|p| self.get(p))
    }

    /// Reject NaN / infinite fields
    pub fn validate(&self) -> Result<(), ReadingError> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(ReadingError::NonFinite { parameter, value });
            }
        }
        Ok(())
    }
}

// ============================================================================
// UNVALIDATED INPUT
// ============================================================================

/// Reading as it arrives from a form or a log row: any field may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingInput {
    pub hours: Option<f64>,
    pub vibration: Option<f64>,
    pub temp: Option<f64>,
    pub oil_pressure: Option<f64>,
    pub fuel: Option<f64>,
    pub load: Option<f64>,
    pub rpm: Option<f64>,
}

impl ReadingInput {
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Hours => self.hours,
            Parameter::Vibration => self.vibration,
            Parameter::Temp => self.temp,
            Parameter::OilPressure => self.oil_pressure,
            Parameter::Fuel => self.fuel,
            Parameter::Load => self.load,
            Parameter::Rpm => self.rpm,
        }
    }

    fn require(&self, parameter: Parameter) -> Result<f64, ReadingError> {
        self.get(parameter).ok_or(ReadingError::MissingField(parameter))
    }
}

impl From<Reading> for ReadingInput {
    fn from(r: Reading) -> Self {
        Self {
            hours: Some(r.hours),
            vibration: Some(r.vibration),
            temp: Some(r.temp),
            oil_pressure: Some(r.oil_pressure),
            fuel: Some(r.fuel),
            load: Some(r.load),
            rpm: Some(r.rpm),
        }
    }
}

impl TryFrom<ReadingInput> for Reading {
    type Error = ReadingError;

    fn try_from(input: ReadingInput) -> Result<Self, Self::Error> {
        let reading = Reading {
            hours: input.require(Parameter::Hours)?,
            vibration: input.require(Parameter::Vibration)?,
            temp: input.require(Parameter::Temp)?,
            oil_pressure: input.require(Parameter::OilPressure)?,
            fuel: input.require(Parameter::Fuel)?,
            load: input.require(Parameter::Load)?,
            rpm: input.require(Parameter::Rpm)?,
        };
        reading.validate()?;
        Ok(reading)
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadingError {
    #[error("missing required field: {0}")]
    MissingField(Parameter),

    #[error("field {parameter} is not a finite number ({value})")]
    NonFinite { parameter: Parameter, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReadingInput {
        ReadingInput {
            hours: Some(500.0),
            vibration: Some(0.5),
            temp: Some(85.0),
            oil_pressure: Some(3.0),
            fuel: Some(20.0),
            load: Some(60.0),
            rpm: Some(900.0),
        }
    }

    #[test]
    fn test_complete_input_converts() {
        let reading = Reading::try_from(sample()).unwrap();
        assert_eq!(reading.rpm, 900.0);
        assert_eq!(reading.values(), [500.0, 0.5, 85.0, 3.0, 20.0, 60.0, 900.0]);
    }

    #[test]
    fn test_missing_field_rejected() {
        let input = ReadingInput { oil_pressure: None, ..sample() };
        assert_eq!(
            Reading::try_from(input),
            Err(ReadingError::MissingField(Parameter::OilPressure))
        );
    }

    #[test]
    fn test_nan_rejected() {
        let input = ReadingInput { temp: Some(f64::NAN), ..sample() };
        match Reading::try_from(input) {
            Err(ReadingError::NonFinite { parameter, .. }) => assert_eq!(parameter, Parameter::Temp),
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_parameter_from_str() {
        assert_eq!("oil_pressure".parse::<Parameter>(), Ok(Parameter::OilPressure));
        assert_eq!("Vibration Level".parse::<Parameter>(), Ok(Parameter::Vibration));
        assert_eq!("rpm".parse::<Parameter>(), Ok(Parameter::Rpm));
        assert!("torque".parse::<Parameter>().is_err());
    }

    #[test]
    fn test_parameter_deserializes_either_name() {
        let api: Parameter = serde_json::from_str("\"oil_pressure\"").unwrap();
        let column: Parameter = serde_json::from_str("\"Oil pressure\"").unwrap();
        assert_eq!(api, Parameter::OilPressure);
        assert_eq!(column, Parameter::OilPressure);
        assert!(serde_json::from_str::<Parameter>("\"torque\"").is_err());

        // serialization keeps the API name
        assert_eq!(serde_json::to_string(&Parameter::OilPressure).unwrap(), "\"oil_pressure\"");
    }

    #[test]
    fn test_chartable_excludes_hours() {
        assert!(!Parameter::Hours.is_chartable());
        assert!(Parameter::CHARTABLE.iter().all(|p| p.is_chartable()));
    }
}
