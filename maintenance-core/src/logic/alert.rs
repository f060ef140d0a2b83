//! Maintenance Alert Policy
//!
//! Low predicted hours override a Safe verdict; an Unsafe verdict always alerts.

use serde::{Deserialize, Serialize};

use crate::constants::{ALERT_IMMEDIATE, ALERT_NOMINAL, DEFAULT_ALERT_HOURS};
use crate::logic::safety::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceAlert {
    Immediate,
    Nominal,
}

impl MaintenanceAlert {
    pub fn message(&self) -> &'static str {
        match self {
            MaintenanceAlert::Immediate => ALERT_IMMEDIATE,
            MaintenanceAlert::Nominal => ALERT_NOMINAL,
        }
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self, MaintenanceAlert::Immediate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertPolicy {
    /// Predicted hours strictly below this trigger an alert
    pub threshold_hours: f64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            threshold_hours: DEFAULT_ALERT_HOURS,
        }
    }
}

impl AlertPolicy {
    pub fn new(threshold_hours: f64) -> Self {
        Self { threshold_hours }
    }

    pub fn evaluate(&self, predicted_hours: f64, verdict: Verdict) -> MaintenanceAlert {
        if predicted_hours < self.threshold_hours || verdict == Verdict::Unsafe {
            MaintenanceAlert::Immediate
        } else {
            MaintenanceAlert::Nominal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_hours_override_safe_verdict() {
        let alert = AlertPolicy::default().evaluate(3.2, Verdict::Safe);
        assert_eq!(alert, MaintenanceAlert::Immediate);
        assert_eq!(alert.message(), "Immediate maintenance action recommended!");
    }

    #[test]
    fn test_unsafe_always_alerts() {
        assert!(AlertPolicy::default().evaluate(500.0, Verdict::Unsafe).is_immediate());
    }

    #[test]
    fn test_nominal() {
        let alert = AlertPolicy::default().evaluate(120.0, Verdict::Safe);
        assert_eq!(alert, MaintenanceAlert::Nominal);
        assert_eq!(alert.message(), "Engine is operating within safe parameters.");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(AlertPolicy::new(5.0).evaluate(5.0, Verdict::Safe), MaintenanceAlert::Nominal);
    }
}
