//! Trends Module - Chart data over the historical log
//!
//! Pure functions; the caller renders.

pub mod moving_average;
pub mod series;
pub mod distribution;

use thiserror::Error;

use crate::logic::telemetry::Parameter;

pub use moving_average::moving_average;
pub use series::{
    load_vs_oil_pressure, moving_average_trend, parameter_trend, preview, MovingAveragePoint,
    MovingAverageTrend, ParameterTrend, PreviewRow, ScatterPoint, TrendPoint,
};
pub use distribution::{safety_distribution, DistributionSlice, SafetyDistribution};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrendError {
    #[error("moving-average window must be at least 1")]
    ZeroWindow,

    #[error("{0} cannot be charted against hours")]
    NotChartable(Parameter),
}
