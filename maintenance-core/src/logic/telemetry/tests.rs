//! Loader tests against on-disk and in-memory CSV fixtures

use std::fs;

use tempfile::tempdir;

use super::loader::{from_reader, load_csv, TelemetryError};
use super::reading::{Parameter, ReadingError};

const SAMPLE_LOG: &str = "\
Time,Hours,Temp,Oil pressure,Vibration Level,Fuel,RPM,Load
2023-01-01 08:00,120,82,3.1,0.4,18,850,55
2023-01-01 09:00,121,88,2.9,0.6,21,910,62
2023-01-01 10:00,122,97,1.8,1.7,33,1300,92
";

#[test]
fn test_load_csv_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine_log.csv");
    fs::write(&path, SAMPLE_LOG).unwrap();

    let log = load_csv(&path).unwrap();
    assert_eq!(log.len(), 3);

    let first = &log.records()[0];
    assert_eq!(first.time, "2023-01-01 08:00");
    assert_eq!(first.reading.hours, 120.0);
    assert_eq!(first.reading.oil_pressure, 3.1);
    assert_eq!(first.reading.vibration, 0.4);
    assert_eq!(first.reading.rpm, 850.0);
    assert_eq!(first.reading.load, 55.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_csv(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, TelemetryError::Io { .. }));
}

#[test]
fn test_extra_columns_and_padding_ignored() {
    let csv = "\
 Time , Hours ,Temp,Oil pressure,Vibration Level,Fuel,RPM,Load,Operator
08:00, 10 ,80,3.0,0.5,20,900,60,alice
";
    let log = from_reader(csv.as_bytes()).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log.records()[0].reading.hours, 10.0);
}

#[test]
fn test_missing_column_rejected() {
    let csv = "Time,Hours,Temp,Oil pressure,Vibration Level,Fuel,Load\n08:00,1,80,3,0.5,20,60\n";
    let err = from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, TelemetryError::MissingColumn("RPM")));
}

#[test]
fn test_empty_cell_reports_row_and_field() {
    let csv = "\
Time,Hours,Temp,Oil pressure,Vibration Level,Fuel,RPM,Load
08:00,1,80,3.0,0.5,20,900,60
09:00,2,81,,0.5,20,900,60
";
    match from_reader(csv.as_bytes()).unwrap_err() {
        TelemetryError::InvalidRow { row, source } => {
            assert_eq!(row, 2);
            assert_eq!(source, ReadingError::MissingField(Parameter::OilPressure));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_nan_cell_rejected() {
    let csv = "\
Time,Hours,Temp,Oil pressure,Vibration Level,Fuel,RPM,Load
08:00,1,NaN,3.0,0.5,20,900,60
";
    let err = from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, TelemetryError::InvalidRow { row: 1, .. }));
}

#[test]
fn test_header_only_log_is_empty() {
    let csv = "Time,Hours,Temp,Oil pressure,Vibration Level,Fuel,RPM,Load\n";
    let log = from_reader(csv.as_bytes()).unwrap();
    assert!(log.is_empty());
}
