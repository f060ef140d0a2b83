//! Historical Log
//!
//! Read-only time series of past readings. Loaded once, shared for the
//! lifetime of the dashboard.

use serde::Serialize;

use super::reading::Reading;

/// One row of the telemetry log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// `Time` column, kept verbatim
    pub time: String,
    #[serde(flatten)]
    pub reading: Reading,
}

impl LogRecord {
    pub fn new(time: impl Into<String>, reading: Reading) -> Self {
        Self {
            time: time.into(),
            reading,
        }
    }
}

/// Ordered, immutable telemetry log
#[derive(Debug, Clone, Default)]
pub struct HistoricalLog {
    records: Vec<LogRecord>,
}

impl HistoricalLog {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn readings(&self) -> impl Iterator<Item = &Reading> {
        self.records.iter().map(|r| &r.reading)
    }

    /// First `n` rows in log order
    pub fn head(&self, n: usize) -> &[LogRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Rows stable-sorted by elapsed hours ascending
    pub fn sorted_by_hours(&self) -> Vec<&LogRecord> {
        let mut sorted: Vec<&LogRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.reading.hours.total_cmp(&b.reading.hours));
        sorted
    }
}

impl FromIterator<LogRecord> for HistoricalLog {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
