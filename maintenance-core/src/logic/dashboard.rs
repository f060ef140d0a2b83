//! Dashboard Engine
//!
//! Everything the presentation layer asks for, computed over state that was
//! loaded once at startup: the historical log and the predictor.

use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use super::alert::{AlertPolicy, MaintenanceAlert};
use super::controls::ControlPanel;
use super::features::FeatureVector;
use super::model::{EngineStatus, InferenceError, InferenceStats, Predictor};
use super::safety::{SafetyEvaluator, Verdict, Violation};
use super::telemetry::{HistoricalLog, Parameter, Reading, ReadingError, ReadingInput};
use super::trends::{
    self, MovingAverageTrend, ParameterTrend, PreviewRow, SafetyDistribution, ScatterPoint,
    TrendError,
};

/// Result of scoring and classifying one reading
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub reading: Reading,
    pub status: Verdict,
    /// First out-of-range parameter when Unsafe
    pub violation: Option<Violation>,
    pub predicted_hours: f64,
    pub alert: MaintenanceAlert,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Reading(#[from] ReadingError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

pub struct Dashboard {
    log: HistoricalLog,
    predictor: Box<dyn Predictor>,
    evaluator: SafetyEvaluator,
    alert_policy: AlertPolicy,
    stats: InferenceStats,
}

impl Dashboard {
    pub fn new(log: HistoricalLog, predictor: Box<dyn Predictor>) -> Self {
        Self {
            log,
            predictor,
            evaluator: SafetyEvaluator::default(),
            alert_policy: AlertPolicy::default(),
            stats: InferenceStats::default(),
        }
    }

    pub fn with_alert_policy(mut self, alert_policy: AlertPolicy) -> Self {
        self.alert_policy = alert_policy;
        self
    }

    pub fn log(&self) -> &HistoricalLog {
        &self.log
    }

    pub fn alert_policy(&self) -> &AlertPolicy {
        &self.alert_policy
    }

    // ------------------------------------------------------------------------
    // Current reading
    // ------------------------------------------------------------------------

    /// Predicted hours until maintenance
    pub fn predict(&self, reading: &Reading) -> Result<f64, InferenceError> {
        let start = Instant::now();
        let result = self.predictor.predict(&FeatureVector::from(reading));
        self.stats.record(start.elapsed());
        result
    }

    /// Validate, score and classify a reading from the controls
    pub fn assess(&self, input: &ReadingInput) -> Result<Assessment, AssessmentError> {
        let reading = Reading::try_from(*input)?;
        Ok(self.assess_reading(&reading)?)
    }

    pub fn assess_reading(&self, reading: &Reading) -> Result<Assessment, InferenceError> {
        let predicted_hours = self.predict(reading)?;
        let inspection = self.evaluator.inspect(reading);
        let alert = self.alert_policy.evaluate(predicted_hours, inspection.verdict);

        log::debug!(
            "Assessment: status={} predicted_hours={:.2} alert={:?}",
            inspection.verdict,
            predicted_hours,
            alert
        );

        Ok(Assessment {
            reading: *reading,
            status: inspection.verdict,
            violation: inspection.violation,
            predicted_hours,
            alert,
            message: alert.message(),
        })
    }

    // ------------------------------------------------------------------------
    // Historical views
    // ------------------------------------------------------------------------

    pub fn preview(&self, rows: usize) -> Vec<PreviewRow> {
        trends::preview(&self.log, rows)
    }

    pub fn parameter_trend(&self, parameter: Parameter) -> Result<ParameterTrend, TrendError> {
        trends::parameter_trend(&self.log, parameter)
    }

    pub fn moving_average_trend(
        &self,
        parameter: Parameter,
        window: usize,
    ) -> Result<MovingAverageTrend, TrendError> {
        trends::moving_average_trend(&self.log, parameter, window)
    }

    pub fn load_vs_oil_pressure(&self) -> Vec<ScatterPoint> {
        trends::load_vs_oil_pressure(&self.log)
    }

    pub fn safety_distribution(&self) -> SafetyDistribution {
        trends::safety_distribution(&self.evaluator, self.log.readings())
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    pub fn engine_status(&self) -> EngineStatus {
        EngineStatus::new(self.predictor.as_ref(), &self.stats)
    }

    pub fn controls(&self) -> ControlPanel {
        ControlPanel {
            safety_ranges: *self.evaluator.ranges(),
            ..ControlPanel::standard()
        }
    }
}
