//! Telemetry Module
//!
//! Engine readings and the historical log they come from.
//!
//! ## Structure
//! - `reading.rs` - Reading, ReadingInput, Parameter
//! - `history.rs` - HistoricalLog (read-only, ordered)
//! - `loader.rs` - CSV ingestion with per-row validation

pub mod reading;
pub mod history;
pub mod loader;

#[cfg(test)]
mod tests;

pub use reading::{Parameter, Reading, ReadingError, ReadingInput, UnknownParameter};
pub use history::{HistoricalLog, LogRecord};
pub use loader::{load_csv, from_reader, TelemetryError, REQUIRED_COLUMNS};
