//! Chart series builders

use serde::Serialize;

use super::moving_average::moving_average;
use super::TrendError;
use crate::logic::telemetry::{HistoricalLog, LogRecord, Parameter};

// ============================================================================
// RAW DATA PREVIEW
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PreviewRow {
    /// 1-based row number
    pub index: usize,
    #[serde(flatten)]
    pub record: LogRecord,
}

/// First `rows` records, numbered from 1
pub fn preview(log: &HistoricalLog, rows: usize) -> Vec<PreviewRow> {
    log.head(rows)
        .iter()
        .enumerate()
        .map(|(i, record)| PreviewRow {
            index: i + 1,
            record: record.clone(),
        })
        .collect()
}

// ============================================================================
// PARAMETER OVER HOURS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub hours: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterTrend {
    pub parameter: Parameter,
    pub label: &'static str,
    pub points: Vec<TrendPoint>,
}

fn ensure_chartable(parameter: Parameter) -> Result<(), TrendError> {
    if parameter.is_chartable() {
        Ok(())
    } else {
        Err(TrendError::NotChartable(parameter))
    }
}

/// `(hours, value)` pairs in log order
pub fn parameter_trend(log: &HistoricalLog, parameter: Parameter) -> Result<ParameterTrend, TrendError> {
    ensure_chartable(parameter)?;

    let points = log
        .readings()
        .map(|r| TrendPoint {
            hours: r.hours,
            value: r.get(parameter),
        })
        .collect();

    Ok(ParameterTrend {
        parameter,
        label: parameter.label(),
        points,
    })
}

// ============================================================================
// MOVING AVERAGE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovingAveragePoint {
    pub hours: f64,
    pub value: f64,
    pub moving_average: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovingAverageTrend {
    pub parameter: Parameter,
    pub label: &'static str,
    pub window: usize,
    pub points: Vec<MovingAveragePoint>,
}

/// Moving average of a column over the log sorted by hours
pub fn moving_average_trend(
    log: &HistoricalLog,
    parameter: Parameter,
    window: usize,
) -> Result<MovingAverageTrend, TrendError> {
    ensure_chartable(parameter)?;

    let sorted = log.sorted_by_hours();
    let values: Vec<f64> = sorted.iter().map(|r| r.reading.get(parameter)).collect();
    let averages = moving_average(&values, window)?;

    let points = sorted
        .iter()
        .zip(values)
        .zip(averages)
        .map(|((record, value), moving_average)| MovingAveragePoint {
            hours: record.reading.hours,
            value,
            moving_average,
        })
        .collect();

    Ok(MovingAverageTrend {
        parameter,
        label: parameter.label(),
        window,
        points,
    })
}

// ============================================================================
// LOAD VS OIL PRESSURE
// ============================================================================

/// Scatter point; temp drives colour, hours is tooltip-only
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub load: f64,
    pub oil_pressure: f64,
    pub temp: f64,
    pub hours: f64,
}

pub fn load_vs_oil_pressure(log: &HistoricalLog) -> Vec<ScatterPoint> {
    log.readings()
        .map(|r| ScatterPoint {
            load: r.load,
            oil_pressure: r.oil_pressure,
            temp: r.temp,
            hours: r.hours,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::telemetry::Reading;

    fn log() -> HistoricalLog {
        [(30.0, 90.0), (10.0, 80.0), (20.0, 85.0), (40.0, 95.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (hours, temp))| {
                LogRecord::new(
                    format!("t{}", i),
                    Reading {
                        hours,
                        vibration: 0.5,
                        temp,
                        oil_pressure: 3.0 + i as f64,
                        fuel: 20.0,
                        load: 50.0 + i as f64,
                        rpm: 900.0,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_preview_numbering() {
        let rows = preview(&log(), 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[1].record.time, "t1");
    }

    #[test]
    fn test_parameter_trend_keeps_log_order() {
        let trend = parameter_trend(&log(), Parameter::Temp).unwrap();
        let hours: Vec<f64> = trend.points.iter().map(|p| p.hours).collect();
        assert_eq!(hours, vec![30.0, 10.0, 20.0, 40.0]);
        assert_eq!(trend.points[0].value, 90.0);
    }

    #[test]
    fn test_hours_not_chartable() {
        assert_eq!(
            parameter_trend(&log(), Parameter::Hours).unwrap_err(),
            TrendError::NotChartable(Parameter::Hours)
        );
    }

    #[test]
    fn test_moving_average_trend_sorted_by_hours() {
        let trend = moving_average_trend(&log(), Parameter::Temp, 2).unwrap();
        let hours: Vec<f64> = trend.points.iter().map(|p| p.hours).collect();
        assert_eq!(hours, vec![10.0, 20.0, 30.0, 40.0]);

        let averages: Vec<Option<f64>> = trend.points.iter().map(|p| p.moving_average).collect();
        assert_eq!(averages, vec![None, Some(82.5), Some(87.5), Some(92.5)]);
    }

    #[test]
    fn test_scatter() {
        let points = load_vs_oil_pressure(&log());
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], ScatterPoint { load: 51.0, oil_pressure: 4.0, temp: 80.0, hours: 10.0 });
    }

    #[test]
    fn test_empty_log_degrades_to_empty_series() {
        let empty = HistoricalLog::default();
        assert!(preview(&empty, 10).is_empty());
        assert!(parameter_trend(&empty, Parameter::Rpm).unwrap().points.is_empty());
        assert!(moving_average_trend(&empty, Parameter::Rpm, 5).unwrap().points.is_empty());
        assert!(load_vs_oil_pressure(&empty).is_empty());
    }
}
