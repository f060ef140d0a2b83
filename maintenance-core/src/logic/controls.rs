//! Dashboard Controls
//!
//! Bounds and defaults of every user input, published so a front-end can
//! draw them and the HTTP layer can enforce them.

use serde::Serialize;

use crate::constants::{
    PREVIEW_ROWS_DEFAULT, PREVIEW_ROWS_MAX, PREVIEW_ROWS_MIN, WINDOW_DEFAULT, WINDOW_MAX,
    WINDOW_MIN,
};
use crate::logic::safety::SafetyRange;
use crate::logic::telemetry::Parameter;

/// One bounded numeric input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputControl {
    pub parameter: Parameter,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl InputControl {
    pub fn for_parameter(parameter: Parameter) -> Self {
        let (min, max, default, step) = match parameter {
            Parameter::Hours => (0.0, 10000.0, 500.0, 1.0),
            Parameter::Vibration => (0.0, 5.0, 0.5, 0.01),
            Parameter::Temp => (50.0, 120.0, 85.0, 1.0),
            Parameter::OilPressure => (0.0, 10.0, 3.0, 0.01),
            Parameter::Fuel => (0.0, 50.0, 20.0, 1.0),
            Parameter::Load => (0.0, 100.0, 60.0, 1.0),
            Parameter::Rpm => (200.0, 2000.0, 900.0, 1.0),
        };

        Self {
            parameter,
            label: parameter.label(),
            min,
            max,
            default,
            step,
        }
    }
}

/// Integer selector (row count, window size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selector {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOption {
    pub parameter: Parameter,
    pub column: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlPanel {
    pub inputs: Vec<InputControl>,
    pub preview_rows: Selector,
    pub moving_average_window: Selector,
    pub chart_parameters: Vec<ChartOption>,
    /// Bounds the safety verdict is judged against
    pub safety_ranges: SafetyRange,
}

impl ControlPanel {
    pub fn standard() -> Self {
        Self {
            inputs: Parameter::ALL.into_iter().map(InputControl::for_parameter).collect(),
            preview_rows: Selector {
                min: PREVIEW_ROWS_MIN,
                max: PREVIEW_ROWS_MAX,
                default: PREVIEW_ROWS_DEFAULT,
            },
            moving_average_window: Selector {
                min: WINDOW_MIN,
                max: WINDOW_MAX,
                default: WINDOW_DEFAULT,
            },
            chart_parameters: Parameter::CHARTABLE
                .into_iter()
                .map(|parameter| ChartOption {
                    parameter,
                    column: parameter.column_name(),
                })
                .collect(),
            safety_ranges: SafetyRange::STANDARD,
        }
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::standard()
    }
}
