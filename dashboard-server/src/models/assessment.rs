//! Assessment request
//!
//! Ranges mirror the dashboard input controls. Presence is checked by the
//! core when the request becomes a Reading.

use serde::Deserialize;
use validator::Validate;

use maintenance_core::ReadingInput;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AssessmentRequest {
    #[validate(range(min = 0.0, max = 10000.0))]
    pub hours: Option<f64>,

    #[validate(range(min = 0.0, max = 5.0))]
    pub vibration: Option<f64>,

    #[validate(range(min = 50.0, max = 120.0))]
    pub temp: Option<f64>,

    #[validate(range(min = 0.0, max = 10.0))]
    pub oil_pressure: Option<f64>,

    #[validate(range(min = 0.0, max = 50.0))]
    pub fuel: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub load: Option<f64>,

    #[validate(range(min = 200.0, max = 2000.0))]
    pub rpm: Option<f64>,
}

impl From<AssessmentRequest> for ReadingInput {
    fn from(req: AssessmentRequest) -> Self {
        Self {
            hours: req.hours,
            vibration: req.vibration,
            temp: req.temp,
            oil_pressure: req.oil_pressure,
            fuel: req.fuel,
            load: req.load,
            rpm: req.rpm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maintenance_core::logic::controls::ControlPanel;
    use maintenance_core::Parameter;

    fn at(parameter: Parameter, value: f64) -> AssessmentRequest {
        let mut req = AssessmentRequest::default();
        let slot = match parameter {
            Parameter::Hours => &mut req.hours,
            Parameter::Vibration => &mut req.vibration,
            Parameter::Temp => &mut req.temp,
            Parameter::OilPressure => &mut req.oil_pressure,
            Parameter::Fuel => &mut req.fuel,
            Parameter::Load => &mut req.load,
            Parameter::Rpm => &mut req.rpm,
        };
        *slot = Some(value);
        req
    }

    #[test]
    fn test_ranges_agree_with_controls() {
        for control in ControlPanel::standard().inputs {
            assert!(at(control.parameter, control.min).validate().is_ok());
            assert!(at(control.parameter, control.max).validate().is_ok());
            assert!(at(control.parameter, control.default).validate().is_ok());
            assert!(at(control.parameter, control.min - 1.0).validate().is_err());
            assert!(at(control.parameter, control.max + 1.0).validate().is_err());
        }
    }
}
