//! Telemetry Loader
//!
//! Reads the engine log CSV into a [`HistoricalLog`]. Every numeric column
//! is validated per row; the first bad row aborts the load.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::history::{HistoricalLog, LogRecord};
use super::reading::{Reading, ReadingError, ReadingInput};

/// Columns that must appear in the header
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Time",
    "Hours",
    "Temp",
    "Oil pressure",
    "Vibration Level",
    "Fuel",
    "RPM",
    "Load",
];

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("cannot open telemetry log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed telemetry CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("telemetry log is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("telemetry row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ReadingError,
    },
}

/// Raw CSV row; fields are optional so absence is reported, not guessed
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Time")]
    time: Option<String>,
    #[serde(rename = "Hours")]
    hours: Option<f64>,
    #[serde(rename = "Vibration Level")]
    vibration: Option<f64>,
    #[serde(rename = "Temp")]
    temp: Option<f64>,
    #[serde(rename = "Oil pressure")]
    oil_pressure: Option<f64>,
    #[serde(rename = "Fuel")]
    fuel: Option<f64>,
    #[serde(rename = "Load")]
    load: Option<f64>,
    #[serde(rename = "RPM")]
    rpm: Option<f64>,
}

impl RawRow {
    fn into_record(self, row: usize) -> Result<LogRecord, TelemetryError> {
        let input = ReadingInput {
            hours: self.hours,
            vibration: self.vibration,
            temp: self.temp,
            oil_pressure: self.oil_pressure,
            fuel: self.fuel,
            load: self.load,
            rpm: self.rpm,
        };
        let reading = Reading::try_from(input)
            .map_err(|source| TelemetryError::InvalidRow { row, source })?;
        Ok(LogRecord::new(self.time.unwrap_or_default(), reading))
    }
}

/// Load the telemetry log from a CSV file
pub fn load_csv(path: impl AsRef<Path>) -> Result<HistoricalLog, TelemetryError> {
    let path = path.as_ref();
    log::info!("Loading telemetry log from: {}", path.display());

    let file = File::open(path).map_err(|source| TelemetryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let log = from_reader(file)?;
    log::info!("Telemetry log loaded: {} rows", log.len());
    Ok(log)
}

/// Parse a telemetry log from any reader (header row required)
pub fn from_reader<R: io::Read>(reader: R) -> Result<HistoricalLog, TelemetryError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(TelemetryError::MissingColumn(*column));
        }
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        records.push(row?.into_record(index + 1)?);
    }

    Ok(HistoricalLog::new(records))
}
